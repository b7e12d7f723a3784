use super::{Tag, FromValue, DerResult};
use super::DerErrorKind::InvalidVal;

// the first content octet counts the unused low bits of the last octet.
// bit 0 is the most significant bit of the first data octet.
// named-bit lists (`bit_string_fields!`) drop trailing zero bits, so a bit
// past the end reads as unset.

#[derive(Clone, PartialEq, Debug)]
pub struct BitString {
    pub unused_bits: u8,
    pub data: Vec<u8>,
}

from_value!(BitString: Tag::BitString);

impl FromValue for BitString {
    fn from_value(value: &[u8]) -> DerResult<BitString> {
        let (&unused_bits, data) = match value.split_first() {
            Some(split) => split,
            None => return der_err!(InvalidVal, "found zero-length BitString"),
        };
        if unused_bits >= 8 {
            return der_err!(InvalidVal, "{} unused bits", unused_bits);
        }
        if unused_bits > 0 && data.is_empty() {
            return der_err!(InvalidVal, "unused bits != 0 but no bits found");
        }

        Ok(BitString {
            unused_bits,
            data: data.to_vec(),
        })
    }
}

impl BitString {
    /// Number of meaningful bits.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8 - self.unused_bits as usize
    }

    /// Bit `i`, counted from the most significant bit. Out of range is `false`.
    pub fn bit(&self, i: usize) -> bool {
        if i >= self.bit_len() {
            return false;
        }
        (self.data[i / 8] >> (7 - i % 8)) & 1 == 1
    }
}

#[cfg(test)]
mod test {
    use super::BitString;
    use crate::der::{FromValue, DerErrorKind};

    #[test]
    fn test_bits() {
        // 0b1000_1, 3 unused
        let bits = BitString::from_value(&[0x03, 0x88]).unwrap();
        assert_eq!(bits.bit_len(), 5);
        assert!(bits.bit(0));
        assert!(!bits.bit(1));
        assert!(bits.bit(4));
        assert!(!bits.bit(5));
        assert!(!bits.bit(100));

        let bits = BitString::from_value(&[0x00, 0x00, 0x01]).unwrap();
        assert_eq!(bits.bit_len(), 16);
        assert!(bits.bit(15));

        let empty = BitString::from_value(&[0x00]).unwrap();
        assert_eq!(empty.bit_len(), 0);
        assert!(!empty.bit(0));
    }

    #[test]
    fn test_invalid() {
        assert_err!(BitString::from_value(&[]), DerErrorKind::InvalidVal);
        assert_err!(BitString::from_value(&[0x08, 0x00]), DerErrorKind::InvalidVal);
        assert_err!(BitString::from_value(&[0x01]), DerErrorKind::InvalidVal);
    }
}
