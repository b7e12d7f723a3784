use std::str;

use super::{Tag, FromTlv, DerResult};
use super::DerErrorKind::{InvalidTag, InvalidVal};

// ASN.1 strings are jokes. there are so many string types with their own subtle rules
// and some of the rules are ignored in wild.
//
// PrintableString doesn't allow '*' but some certs contain such values.
// https://code.google.com/p/go/issues/detail?id=850
// (mozilla pkix also accepts '*'.)
//
// PrintableString also doesn't allow '@', so you cannot print e-mail address.
// Due to this, some legacy certs used IA5String where it cannot occur.
//
// there are *three* unicode strings. UniversalString and Utf8String are
// basically same in ASN.1 but differently encoded in DER.
// BMPString is.. BMP subset. encoded as ucs2.
// (did you know ucs2 is big endian in spec?)
//
// also keep in mind that Rust doesn't accept invalid surrogates.
// we will just treat such string as "invalid".

impl FromTlv for String {
    fn from_tlv(tag: Tag, value: &[u8]) -> DerResult<String> {
        match tag {
            Tag::Utf8String | Tag::PrintableString | Tag::Ia5String |
            Tag::TeletexString | Tag::VisibleString | Tag::NumericString => {
                match str::from_utf8(value) {
                    Ok(value) => Ok(value.to_owned()),
                    Err(err) => der_err!(InvalidVal, "invalid utf-8: {}, \"{:?}\"", err, value),
                }
            }
            Tag::BmpString => from_ucs2(value),
            Tag::UniversalString => from_ucs4(value),
            _ => der_err!(InvalidTag, "unexpected tag \"{:?}\" for String", tag),
        }
    }
}

fn from_ucs2(value: &[u8]) -> DerResult<String> {
    if value.len() % 2 != 0 {
        return der_err!(InvalidVal, "BmpString with odd length {}", value.len());
    }
    let units: Vec<u16> = value.chunks(2)
                               .map(|c| ((c[0] as u16) << 8) | c[1] as u16)
                               .collect();
    match String::from_utf16(&units) {
        Ok(s) => Ok(s),
        Err(err) => der_err!(InvalidVal, "invalid BmpString: {}", err),
    }
}

fn from_ucs4(value: &[u8]) -> DerResult<String> {
    if value.len() % 4 != 0 {
        return der_err!(InvalidVal, "UniversalString with length {}", value.len());
    }
    let mut s = String::with_capacity(value.len() / 4);
    for c in value.chunks(4) {
        let cp = c.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32);
        match ::std::char::from_u32(cp) {
            Some(ch) => s.push(ch),
            None => return der_err!(InvalidVal, "invalid code point {:#x} in UniversalString", cp),
        }
    }
    Ok(s)
}

#[cfg(test)]
mod test {
    use crate::der::{Tag, FromTlv, DerResult};

    #[test]
    fn test_strings() {
        let s: DerResult<String> = FromTlv::from_tlv(Tag::PrintableString, b"US");
        assert_eq!(s.unwrap(), "US");

        let s: DerResult<String> = FromTlv::from_tlv(Tag::BmpString, &[0x00, 0x41, 0x00, 0xe9]);
        assert_eq!(s.unwrap(), "A\u{e9}");

        let s: DerResult<String> = FromTlv::from_tlv(Tag::UniversalString,
                                                     &[0x00, 0x01, 0xf6, 0x00]);
        assert_eq!(s.unwrap(), "\u{1f600}");
    }

    #[test]
    fn test_invalid_strings() {
        let s: DerResult<String> = FromTlv::from_tlv(Tag::Utf8String, &[0xff]);
        assert_err!(s, crate::der::DerErrorKind::InvalidVal);

        // lone surrogate
        let s: DerResult<String> = FromTlv::from_tlv(Tag::BmpString, &[0xd8, 0x00]);
        assert_err!(s, crate::der::DerErrorKind::InvalidVal);

        let s: DerResult<String> = FromTlv::from_tlv(Tag::BmpString, &[0x00]);
        assert_err!(s, crate::der::DerErrorKind::InvalidVal);

        let s: DerResult<String> = FromTlv::from_tlv(Tag::Integer, &[0x01]);
        assert_err!(s, crate::der::DerErrorKind::InvalidTag);
    }
}
