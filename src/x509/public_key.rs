use crate::der::{FromTlv, DerResult, DerReader, BitString, Integer};
use crate::der::DerErrorKind::InvalidVal;
use crate::known;

use super::alg_id::AlgorithmIdentifier;

sequence!(struct SubjectPublicKeyInfo {
    alg: AlgorithmIdentifier,
    subject_pub_key: BitString,
});

// RFC 3279 2.3.1
sequence!(struct RsaPublicKey {
    modulus: Integer,
    public_exponent: Integer,
});

impl SubjectPublicKeyInfo {
    pub fn is_rsa(&self) -> bool {
        self.alg.algorithm.is(known::RSA_ENCRYPTION)
    }

    /// Decode the key bits as `RSAPublicKey`.
    pub fn rsa_public_key(&self) -> DerResult<RsaPublicKey> {
        if self.subject_pub_key.unused_bits != 0 {
            return der_err!(InvalidVal, "RSA key with {} unused bits", self.subject_pub_key.unused_bits);
        }
        let mut reader = DerReader::new(&self.subject_pub_key.data);
        let (tag, value) = reader.next_tlv()?;
        let key: RsaPublicKey = FromTlv::from_tlv(tag, value)?;
        if !reader.is_eof() {
            return der_err!(InvalidVal, "trailing data after RSAPublicKey");
        }
        Ok(key)
    }

    /// Key size in bits: modulus length for RSA, raw key length for X25519 and Ed25519,
    /// field size for named curves.
    pub fn key_size(&self) -> Option<usize> {
        if self.is_rsa() {
            return match self.rsa_public_key() {
                Ok(key) => Some(key.modulus.bit_len()),
                Err(err) => {
                    debug!("cannot decode RSA key: {}", err);
                    None
                }
            };
        }
        if self.alg.algorithm.is(known::X25519) || self.alg.algorithm.is(known::ED25519) {
            return Some(self.subject_pub_key.bit_len());
        }
        let curve = self.alg.parameters_oid()?.to_absolute().ok()?;
        known::curve(&curve).map(|(_, bits)| bits)
    }
}
