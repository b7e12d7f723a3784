// DER reader

use std::error::Error;
use std::fmt;

pub use self::reader::DerReader;
pub use self::bit_string::BitString;
pub use self::obj_id::ObjId;
pub use self::time::Time;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum DerErrorKind {
    /// length field is too big or invalid
    InvalidLen,
    /// unknown or unsupported tag value found
    InvalidTag,
    /// unexpected eof while reading tlv
    Eof,
    /// value field has invalid data
    InvalidVal,
}

#[derive(Debug)]
pub struct DerError {
    pub kind: DerErrorKind,
    pub desc: String,
}

impl fmt::Display for DerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.desc.fmt(f)
    }
}

impl Error for DerError {
    fn description(&self) -> &str {
        match self.kind {
            DerErrorKind::InvalidLen => "invalid length",
            DerErrorKind::InvalidTag => "invalid tag",
            DerErrorKind::Eof => "unexpected end of DER",
            DerErrorKind::InvalidVal => "invalid value",
        }
    }
}

impl DerError {
    pub fn new<T>(kind: DerErrorKind, desc: String) -> DerResult<T> {
        Err(DerError {
            kind,
            desc,
        })
    }
}

pub type DerResult<T> = Result<T, DerError>;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TagClass {
    Universal = 0b00,
    Application = 0b01,
    ContextSpecific = 0b10,
    Private = 0b11,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tag {
    // primitives
    Boolean, // 0x01
    Integer, // 0x02
    BitString, // 0x03
    OctetString, // 0x04
    Null, // 0x05
    ObjectIdentifier, // 0x06
    ObjectDescriptor, // 0x07
    External, // 0x08
    Real, // 0x09
    Enumerated, // 0x0a
    EmbeddedPdv, // 0x0b

    // wow much string
    Utf8String, // 0x0c
    NumericString, // 0x12
    PrintableString, // 0x13
    TeletexString, // 0x14
    VideotexString, // 0x15
    Ia5String, // 0x16
    GraphicString, // 0x19
    VisibleString, // 0x1a
    GeneralString, // 0x1b
    UniversalString, // 0x1c
    BmpString, // 0x1e

    UtcTime, // 0x17
    GeneralizedTime, // 0x18

    // constructed
    Sequence, // 0x10
    Set, // 0x11

    Primitive(u8, TagClass), // tag, tag_class
    Constructed(u8, TagClass), //tag, tag_class
}

impl Tag {
    /// Identifier octet of this tag.
    pub fn to_byte(&self) -> u8 {
        const CONSTRUCTED: u8 = 0b10_0000;
        match *self {
            Tag::Boolean => 0x01,
            Tag::Integer => 0x02,
            Tag::BitString => 0x03,
            Tag::OctetString => 0x04,
            Tag::Null => 0x05,
            Tag::ObjectIdentifier => 0x06,
            Tag::ObjectDescriptor => 0x07,
            Tag::External => 0x08 | CONSTRUCTED,
            Tag::Real => 0x09,
            Tag::Enumerated => 0x0a,
            Tag::EmbeddedPdv => 0x0b | CONSTRUCTED,
            Tag::Utf8String => 0x0c,
            Tag::NumericString => 0x12,
            Tag::PrintableString => 0x13,
            Tag::TeletexString => 0x14,
            Tag::VideotexString => 0x15,
            Tag::Ia5String => 0x16,
            Tag::UtcTime => 0x17,
            Tag::GeneralizedTime => 0x18,
            Tag::GraphicString => 0x19,
            Tag::VisibleString => 0x1a,
            Tag::GeneralString => 0x1b,
            Tag::UniversalString => 0x1c,
            Tag::BmpString => 0x1e,
            Tag::Sequence => 0x10 | CONSTRUCTED,
            Tag::Set => 0x11 | CONSTRUCTED,
            Tag::Primitive(tag, class) => ((class as u8) << 6) | tag,
            Tag::Constructed(tag, class) => ((class as u8) << 6) | CONSTRUCTED | tag,
        }
    }
}

pub trait FromTlv: Sized {
    fn from_tlv(tag: Tag, value: &[u8]) -> DerResult<Self>;
}

pub trait FromValue: FromTlv {
    fn from_value(value: &[u8]) -> DerResult<Self>;
}

#[macro_use] pub mod macros;
pub mod reader;

// basic primitive types

pub mod bit_string;
pub mod obj_id;
pub mod string;
pub mod time;

from_value!((): Tag::Null);
impl FromValue for () {
    fn from_value(value: &[u8]) -> DerResult<()> {
        if !value.is_empty() {
            return der_err!(DerErrorKind::InvalidVal, "Null with non-zero length");
        }
        Ok(())
    }
}

from_value!(bool: Tag::Boolean);
impl FromValue for bool {
    fn from_value(value: &[u8]) -> DerResult<bool> {
        if value.len() != 1 {
            return der_err!(DerErrorKind::InvalidVal, "boolean with wrong length");
        }
        match value[0] {
            0 => Ok(false),
            255 => Ok(true),
            val => der_err!(DerErrorKind::InvalidVal, "boolean with wrong value: {}", val),
        }
    }
}

from_value!(Vec<u8>: Tag::OctetString);
impl FromValue for Vec<u8> {
    fn from_value(value: &[u8]) -> DerResult<Vec<u8>> {
        Ok(value.to_vec())
    }
}

/// Any TLV, kept as-is.
#[derive(Clone, PartialEq, Debug)]
pub struct Any(pub Tag, pub Vec<u8>);

impl FromTlv for Any {
    fn from_tlv(tag: Tag, value: &[u8]) -> DerResult<Any> {
        Ok(Any(tag, value.to_vec()))
    }
}

impl Any {
    /// Re-encode as a full TLV. Lengths up to 65535 only, same as the reader.
    pub fn to_der(&self) -> Vec<u8> {
        let Any(tag, ref value) = *self;
        let len = value.len();
        let mut der = Vec::with_capacity(len + 4);
        der.push(tag.to_byte());
        if len < 0x80 {
            der.push(len as u8);
        } else if len <= 0xff {
            der.push(0x81);
            der.push(len as u8);
        } else {
            der.push(0x82);
            der.push((len >> 8) as u8);
            der.push(len as u8);
        }
        der.extend_from_slice(value);
        der
    }
}

/// INTEGER as raw two's complement octets.
#[derive(Clone, PartialEq, Debug)]
pub struct Integer(pub Vec<u8>);
from_value!(Integer: Tag::Integer);
impl FromValue for Integer {
    fn from_value(value: &[u8]) -> DerResult<Integer> {
        if value.is_empty() {
            return der_err!(DerErrorKind::InvalidVal, "Integer with zero length");
        }
        Ok(Integer(value.to_vec()))
    }
}

impl Integer {
    pub fn is_negative(&self) -> bool {
        self.0[0] & 0x80 != 0
    }

    /// Magnitude octets of a non-negative integer, without the leading sign octet.
    pub fn magnitude(&self) -> &[u8] {
        let mut value = &self.0[..];
        while value.len() > 1 && value[0] == 0 {
            value = &value[1..];
        }
        value
    }

    /// `None` if negative or wider than 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        let value = self.magnitude();
        if value.len() > 8 {
            return None;
        }
        Some(value.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Number of significant bits of a non-negative integer.
    pub fn bit_len(&self) -> usize {
        let value = self.magnitude();
        let top = value[0];
        if top == 0 {
            return 0;
        }
        (value.len() - 1) * 8 + (8 - top.leading_zeros() as usize)
    }
}
