use std::fmt;

use rustc_serialize::hex::ToHex;

use super::{Tag, FromValue, DerResult};
use super::DerErrorKind::InvalidVal;
use crate::oid::{self, OidResult};

#[derive(Clone, PartialEq, Debug)]
pub struct ObjId {
    // DER encoding of object identifier, without tag and length.
    pub value: Vec<u8>,
}

from_value!(ObjId: Tag::ObjectIdentifier);

impl FromValue for ObjId {
    fn from_value(value: &[u8]) -> DerResult<ObjId> {
        if value.is_empty() {
            return der_err!(InvalidVal, "ObjectIdentifier with zero length");
        }

        Ok(ObjId {
            value: value.to_vec()
        })
    }
}

impl ObjId {
    /// Build from dotted-decimal form, e.g. `"2.5.4.3"`.
    pub fn from_absolute(dotted: &str) -> OidResult<ObjId> {
        let mut ber = oid::encode(dotted)?;
        Ok(ObjId {
            value: ber.split_off(2),
        })
    }

    /// Dotted-decimal form, e.g. `"2.5.4.3"`.
    pub fn to_absolute(&self) -> OidResult<String> {
        oid::decode_value(&self.value)
    }

    /// `[0x06][len][content]`, the form `oid::decode` takes.
    ///
    /// The length octet saturates at `oid::MAX_CONTENT_LEN`. `oid::decode` reads
    /// everything after the header, so longer content still decodes.
    pub fn to_ber(&self) -> Vec<u8> {
        let mut ber = Vec::with_capacity(self.value.len() + 2);
        ber.push(oid::OBJECT_IDENTIFIER_TAG);
        ber.push(self.value.len().min(oid::MAX_CONTENT_LEN) as u8);
        ber.extend_from_slice(&self.value);
        ber
    }

    pub fn is(&self, dotted: &str) -> bool {
        match self.to_absolute() {
            Ok(ref absolute) => absolute == dotted,
            Err(..) => false,
        }
    }
}

impl fmt::Display for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_absolute() {
            Ok(absolute) => f.write_str(&absolute),
            Err(..) => write!(f, "<invalid oid {}>", self.value.to_hex()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ObjId;
    use crate::der::{FromTlv, DerReader};
    use crate::oid;

    #[test]
    fn test_obj_id_absolute() {
        let der = [0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b];
        let mut reader = DerReader::new(&der);
        let (tag, value) = reader.next_tlv().unwrap();
        let id: ObjId = FromTlv::from_tlv(tag, value).unwrap();

        assert_eq!(id.to_absolute().unwrap(), "1.2.840.113549.1.1.11");
        assert_eq!(id.to_ber(), der.to_vec());
        assert!(id.is("1.2.840.113549.1.1.11"));
        assert!(!id.is("1.2.840.113549.1.1.1"));
        assert_eq!(ObjId::from_absolute("1.2.840.113549.1.1.11").unwrap(), id);
        assert_eq!(format!("{}", id), "1.2.840.113549.1.1.11");
    }

    #[test]
    fn test_obj_id_long_content() {
        // 1.2 followed by 299 arcs of 1
        let mut value = vec![0x2a];
        value.extend_from_slice(&[0x01; 299]);
        let id = ObjId { value };
        let ber = id.to_ber();
        assert_eq!(ber.len(), 302);
        assert_eq!(&ber[..2], &[0x06, 0xff]);
        let dotted = oid::decode(&ber).unwrap();
        assert!(dotted.starts_with("1.2.1.1."));
        assert_eq!(dotted.split('.').count(), 301);
    }

    #[test]
    fn test_obj_id_invalid_display() {
        let id = ObjId { value: vec![0x2a, 0x86] };
        assert!(!id.is("1.2"));
        assert_eq!(format!("{}", id), "<invalid oid 2a86>");
    }
}
