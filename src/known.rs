//! Well-known object identifiers, in dotted-decimal form, and their display names.

// X.520 attribute types: joint-iso-ccitt(2) ds(5) attributeType(4)
pub const COMMON_NAME: &str = "2.5.4.3";
pub const COUNTRY_NAME: &str = "2.5.4.6";
pub const LOCALITY_NAME: &str = "2.5.4.7";
pub const STATE_OR_PROVINCE_NAME: &str = "2.5.4.8";
pub const STREET_ADDRESS: &str = "2.5.4.9";
pub const ORGANIZATION_NAME: &str = "2.5.4.10";
pub const ORGANIZATIONAL_UNIT_NAME: &str = "2.5.4.11";
// RFC 4519
pub const DOMAIN_COMPONENT: &str = "0.9.2342.19200300.100.1.25";
pub const USER_ID: &str = "0.9.2342.19200300.100.1.1";

// RFC 5280 4.2.1: id-ce
pub const KEY_USAGE: &str = "2.5.29.15";
pub const BASIC_CONSTRAINTS: &str = "2.5.29.19";

// RFC 3279, RFC 4055: pkcs-1
pub const RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
pub const MD5_WITH_RSA: &str = "1.2.840.113549.1.1.4";
pub const SHA1_WITH_RSA: &str = "1.2.840.113549.1.1.5";
pub const RSASSA_PSS: &str = "1.2.840.113549.1.1.10";
pub const SHA256_WITH_RSA: &str = "1.2.840.113549.1.1.11";
pub const SHA384_WITH_RSA: &str = "1.2.840.113549.1.1.12";
pub const SHA512_WITH_RSA: &str = "1.2.840.113549.1.1.13";
pub const SHA224_WITH_RSA: &str = "1.2.840.113549.1.1.14";

// RFC 5480, RFC 5758
pub const EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
pub const ECDSA_WITH_SHA1: &str = "1.2.840.10045.4.1";
pub const ECDSA_WITH_SHA224: &str = "1.2.840.10045.4.3.1";
pub const ECDSA_WITH_SHA256: &str = "1.2.840.10045.4.3.2";
pub const ECDSA_WITH_SHA384: &str = "1.2.840.10045.4.3.3";
pub const ECDSA_WITH_SHA512: &str = "1.2.840.10045.4.3.4";

// RFC 8410
pub const X25519: &str = "1.3.101.110";
pub const ED25519: &str = "1.3.101.112";

// named curves
pub const SECP256R1: &str = "1.2.840.10045.3.1.7";
pub const SECP384R1: &str = "1.3.132.0.34";
pub const SECP521R1: &str = "1.3.132.0.35";

/// (oid, digest, algorithm)
static SIGNATURE_ALGORITHMS: &[(&str, &str, &str)] = &[
    (MD5_WITH_RSA, "MD5", "RSA"),
    (SHA1_WITH_RSA, "SHA-1", "RSA"),
    (SHA224_WITH_RSA, "SHA-224", "RSA"),
    (SHA256_WITH_RSA, "SHA-256", "RSA"),
    (SHA384_WITH_RSA, "SHA-384", "RSA"),
    (SHA512_WITH_RSA, "SHA-512", "RSA"),
    (RSASSA_PSS, "", "RSA-PSS"),
    (ECDSA_WITH_SHA1, "SHA-1", "ECDSA"),
    (ECDSA_WITH_SHA224, "SHA-224", "ECDSA"),
    (ECDSA_WITH_SHA256, "SHA-256", "ECDSA"),
    (ECDSA_WITH_SHA384, "SHA-384", "ECDSA"),
    (ECDSA_WITH_SHA512, "SHA-512", "ECDSA"),
    (ED25519, "", "Ed25519"),
];

/// (oid, algorithm)
static KEY_ALGORITHMS: &[(&str, &str)] = &[
    (RSA_ENCRYPTION, "RSA"),
    (EC_PUBLIC_KEY, "EC"),
    (X25519, "X25519"),
    (ED25519, "Ed25519"),
];

/// (oid, name, key size in bits)
static CURVES: &[(&str, &str, usize)] = &[
    (SECP256R1, "P-256", 256),
    (SECP384R1, "P-384", 384),
    (SECP521R1, "P-521", 521),
];

/// Digest and algorithm names of a signature algorithm.
/// Digest is empty for algorithms that don't name one (Ed25519, PSS).
pub fn signature_algorithm(oid: &str) -> Option<(&'static str, &'static str)> {
    SIGNATURE_ALGORITHMS.iter()
                        .find(|&&(id, _, _)| id == oid)
                        .map(|&(_, digest, alg)| (digest, alg))
}

pub fn key_algorithm(oid: &str) -> Option<&'static str> {
    KEY_ALGORITHMS.iter().find(|&&(id, _)| id == oid).map(|&(_, alg)| alg)
}

/// Name and key size of a named curve.
pub fn curve(oid: &str) -> Option<(&'static str, usize)> {
    CURVES.iter().find(|&&(id, _, _)| id == oid).map(|&(_, name, bits)| (name, bits))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::oid;

    #[test]
    fn test_lookups() {
        assert_eq!(signature_algorithm(SHA256_WITH_RSA), Some(("SHA-256", "RSA")));
        assert_eq!(signature_algorithm(ED25519), Some(("", "Ed25519")));
        assert_eq!(signature_algorithm("1.2.3"), None);
        assert_eq!(key_algorithm(EC_PUBLIC_KEY), Some("EC"));
        assert_eq!(curve(SECP384R1), Some(("P-384", 384)));
        assert_eq!(curve("1.2.840.10045.3.1.1"), None);
    }

    // every registered oid has to survive the codec, or lookups by decoded oid never match.
    #[test]
    fn test_all_encodable() {
        let all = SIGNATURE_ALGORITHMS.iter().map(|&(id, _, _)| id)
            .chain(KEY_ALGORITHMS.iter().map(|&(id, _)| id))
            .chain(CURVES.iter().map(|&(id, _, _)| id))
            .chain([COMMON_NAME, COUNTRY_NAME, DOMAIN_COMPONENT, USER_ID, KEY_USAGE].iter().cloned());

        for id in all {
            assert_eq!(oid::decode(&oid::encode(id).unwrap()).unwrap(), id);
        }
    }
}
