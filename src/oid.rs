// OBJECT IDENTIFIER codec.
//
// converts between the dotted-decimal ("absolute") form, e.g. `1.2.840.113549.1.1.11`,
// and the BER form `[0x06][len][content]`.
//
// # Notes
//
// -   arcs are limited to 64 bits. bigger arcs exist in the wild (uuid-based `2.25.*`),
//     but supporting them requires a bigint and nobody displays them anyway.
// -   the length is always a single octet, so content is limited to 255 bytes.
// -   `decode` strips the two header octets without looking at them.
//     callers hand us slices they already know are OIDs.

use std::error::Error;
use std::fmt;

pub const OBJECT_IDENTIFIER_TAG: u8 = 0x06;

/// Largest content length a single length octet can carry.
pub const MAX_CONTENT_LEN: usize = 0xff;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OidErrorKind {
    /// arc does not fit in u64.
    /// Only raised for all-digit arcs. Non-numeric ones are `InvalidArc`, even when longer.
    ArcTooLarge,
    /// arc is empty or not a decimal number
    InvalidArc,
    /// first arc > 2, or second arc > 39 under roots 0 and 1, or less than two arcs
    InvalidRootArc,
    /// input is too short or ends in the middle of an arc
    InvalidBerEncoding,
    /// content doesn't fit in a single length octet
    ContentTooLong,
}

#[derive(Debug)]
pub struct OidError {
    pub kind: OidErrorKind,
    pub desc: String,
}

impl OidError {
    pub fn new<T>(kind: OidErrorKind, desc: String) -> OidResult<T> {
        Err(OidError {
            kind,
            desc,
        })
    }
}

impl fmt::Display for OidError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.desc.fmt(f)
    }
}

impl Error for OidError {
    fn description(&self) -> &str {
        match self.kind {
            OidErrorKind::ArcTooLarge => "arc larger than 64 bits",
            OidErrorKind::InvalidArc => "arc is not a decimal number",
            OidErrorKind::InvalidRootArc => "invalid root arcs",
            OidErrorKind::InvalidBerEncoding => "invalid BER encoding",
            OidErrorKind::ContentTooLong => "encoded OID too long",
        }
    }
}

pub type OidResult<T> = Result<T, OidError>;

macro_rules! oid_err {
    ($kind:expr, $($args:tt)*) => (
        $crate::oid::OidError::new($kind, format!($($args)*))
    )
}

use self::OidErrorKind::{ArcTooLarge, InvalidArc, InvalidRootArc, InvalidBerEncoding, ContentTooLong};

/// Split a dotted-decimal OID into its arcs.
pub fn parse_arcs(oid: &str) -> OidResult<Vec<u64>> {
    let mut arcs = Vec::new();
    for arc in oid.split('.') {
        if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
            return oid_err!(InvalidArc, "invalid arc {:?} in {:?}", arc, oid);
        }
        // only digits are left, so parsing can only fail on overflow.
        match arc.parse::<u64>() {
            Ok(arc) => arcs.push(arc),
            Err(_) => return oid_err!(ArcTooLarge, "arc {} does not fit in 64 bits", arc),
        }
    }
    Ok(arcs)
}

/// Derive the first two arcs from the first subidentifier.
///
/// roots 0 and 1 only have 40 children each, everything above 79 belongs to root 2.
pub fn split_root(combined: u64) -> (u64, u64) {
    match combined {
        0..=39 => (0, combined),
        40..=79 => (1, combined - 40),
        _ => (2, combined - 80),
    }
}

// big-endian base-128, high bit set on every octet but the last.
fn push_base128(buf: &mut Vec<u8>, mut value: u64) {
    // u64 needs at most 10 groups of 7 bits
    let mut groups = [0u8; 10];
    let mut len = 0;
    loop {
        groups[len] = (value & 0x7f) as u8;
        len += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }

    for i in (0..len).rev() {
        let more = if i > 0 { 0x80 } else { 0x00 };
        buf.push(groups[i] | more);
    }
}

/// Encode arcs into OID content octets (no tag, no length).
pub fn encode_value(arcs: &[u64]) -> OidResult<Vec<u8>> {
    let (root, second) = match arcs {
        [root, second, ..] => (*root, *second),
        _ => {
            return oid_err!(InvalidRootArc, "expected at least two arcs, found {}", arcs.len());
        }
    };

    if root > 2 || (root <= 1 && second > 39) {
        return oid_err!(InvalidRootArc, "invalid root arcs {}.{}", root, second);
    }

    let combined = match (root * 40).checked_add(second) {
        Some(combined) => combined,
        None => return oid_err!(ArcTooLarge, "arc {}.{} overflows the first subidentifier", root, second),
    };

    let mut content = Vec::new();
    push_base128(&mut content, combined);
    for &arc in &arcs[2..] {
        push_base128(&mut content, arc);
    }
    Ok(content)
}

/// Encode a dotted-decimal OID as `[0x06][len][content]`.
pub fn encode(oid: &str) -> OidResult<Vec<u8>> {
    let arcs = parse_arcs(oid)?;
    let content = encode_value(&arcs)?;

    if content.len() > MAX_CONTENT_LEN {
        return oid_err!(ContentTooLong, "{} content octets do not fit in one length octet", content.len());
    }

    let mut ber = Vec::with_capacity(content.len() + 2);
    ber.push(OBJECT_IDENTIFIER_TAG);
    ber.push(content.len() as u8);
    ber.extend_from_slice(&content);
    Ok(ber)
}

/// Decode OID content octets (no tag, no length) into arcs.
pub fn decode_arcs(content: &[u8]) -> OidResult<Vec<u64>> {
    if content.is_empty() {
        return oid_err!(InvalidBerEncoding, "ObjectIdentifier without content");
    }

    let mut arcs = Vec::new();
    let mut value: u64 = 0;
    let mut pending = false;

    for &b in content {
        if value > (u64::MAX >> 7) {
            return oid_err!(ArcTooLarge, "arc #{} does not fit in 64 bits", arcs.len());
        }
        value = (value << 7) | (b & 0x7f) as u64;

        if b & 0x80 == 0 {
            if arcs.is_empty() {
                let (root, second) = split_root(value);
                arcs.push(root);
                arcs.push(second);
            } else {
                arcs.push(value);
            }
            value = 0;
            pending = false;
        } else {
            pending = true;
        }
    }

    if pending {
        return oid_err!(InvalidBerEncoding, "content ends inside an arc");
    }

    Ok(arcs)
}

/// Decode OID content octets (no tag, no length) into dotted-decimal form.
pub fn decode_value(content: &[u8]) -> OidResult<String> {
    let arcs = decode_arcs(content)?;
    let dotted: Vec<String> = arcs.iter().map(|arc| arc.to_string()).collect();
    Ok(dotted.join("."))
}

/// Decode `[0x06][len][content]` into dotted-decimal form.
pub fn decode(ber: &[u8]) -> OidResult<String> {
    if ber.len() < 2 {
        return oid_err!(InvalidBerEncoding, "expected tag and length, found {} octets", ber.len());
    }
    decode_value(&ber[2..])
}

/// Same as `encode`, but returns an empty buffer on failure.
/// Meant for display code where a blank field is fine.
pub fn encode_lossy(oid: &str) -> Vec<u8> {
    match encode(oid) {
        Ok(ber) => ber,
        Err(err) => {
            debug!("encode_lossy: {:?}: {}", oid, err);
            Vec::new()
        }
    }
}

/// Same as `decode`, but returns an empty string on failure.
/// Meant for display code where a blank field is fine.
pub fn decode_lossy(ber: &[u8]) -> String {
    match decode(ber) {
        Ok(dotted) => dotted,
        Err(err) => {
            debug!("decode_lossy: {:?}: {}", ber, err);
            String::new()
        }
    }
}
