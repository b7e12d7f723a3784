use crate::der::{Tag, FromValue, DerResult};
use crate::der::DerErrorKind::InvalidVal;

// For some reason I will never understand, SerialNumber is packed into Integer.
// This means serial number can be negative!
#[derive(Debug)]
pub struct CertificateSerialNumber {
    pub val: Vec<u8>
}

from_value!(CertificateSerialNumber: Tag::Integer);

impl FromValue for CertificateSerialNumber {
    fn from_value(val: &[u8]) -> DerResult<CertificateSerialNumber> {
        if val.is_empty() {
            return der_err!(InvalidVal, "zero-length CertificateSerialNumber");
        }

        if val.len() > 1 {
            let v0 = val[0];
            let v1 = val[1];

            if (v0 == 0 && (v1 >> 7) == 0) || (v0 == 0xFF && (v1 >> 7) == 1) {
                return der_err!(InvalidVal, "overlong bits");
            }
        }

        Ok(CertificateSerialNumber {
            val: val.to_vec()
        })
    }
}

impl CertificateSerialNumber {
    /// Octets without the sign octet DER adds in front of "negative-looking" positive values.
    pub fn unsigned_bytes(&self) -> &[u8] {
        if self.val.len() > 1 && self.val[0] == 0 {
            &self.val[1..]
        } else {
            &self.val[..]
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.val[0] & 0x80 != 0 {
            return None;
        }
        let bytes = self.unsigned_bytes();
        if bytes.len() > 8 {
            return None;
        }
        Some(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }
}
