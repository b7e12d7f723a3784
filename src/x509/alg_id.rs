use crate::der::{Tag, ObjId, Any};

// AlgorithmIdentifier ::= SEQUENCE {
//     algorithm   OBJECT IDENTIFIER,
//     parameters  ANY DEFINED BY algorithm OPTIONAL
// }
sequence_opts!(struct AlgorithmIdentifier {
    algorithm(): ObjId,
    parameters(OPTIONAL_ANY): Option<Any>,
});

impl AlgorithmIdentifier {
    /// Full DER of the parameters. RSA algorithms put NULL there, which counts as absent.
    pub fn parameters_der(&self) -> Option<Vec<u8>> {
        match self.parameters {
            None => None,
            Some(Any(Tag::Null, _)) => None,
            Some(ref any) => Some(any.to_der()),
        }
    }

    /// Parameters that are themselves an OBJECT IDENTIFIER, e.g. a named curve.
    pub fn parameters_oid(&self) -> Option<ObjId> {
        match self.parameters {
            Some(Any(Tag::ObjectIdentifier, ref value)) => Some(ObjId { value: value.clone() }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::AlgorithmIdentifier;
    use crate::der::{FromTlv, DerReader};
    use crate::known;

    fn parse(der: &[u8]) -> AlgorithmIdentifier {
        let mut reader = DerReader::new(der);
        let (tag, value) = reader.next_tlv().unwrap();
        FromTlv::from_tlv(tag, value).unwrap()
    }

    #[test]
    fn test_null_parameters() {
        let alg = parse(&[0x30, 0x0d,
                          0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b,
                          0x05, 0x00]);
        assert!(alg.algorithm.is(known::SHA256_WITH_RSA));
        assert!(alg.parameters.is_some());
        assert_eq!(alg.parameters_der(), None);
        assert_eq!(alg.parameters_oid(), None);
    }

    #[test]
    fn test_absent_parameters() {
        let alg = parse(&[0x30, 0x0a,
                          0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02]);
        assert!(alg.algorithm.is(known::ECDSA_WITH_SHA256));
        assert!(alg.parameters.is_none());
        assert_eq!(alg.parameters_der(), None);
    }

    #[test]
    fn test_curve_parameters() {
        let alg = parse(&[0x30, 0x13,
                          0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01,
                          0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07]);
        assert!(alg.algorithm.is(known::EC_PUBLIC_KEY));
        assert_eq!(alg.parameters_der().unwrap(),
                   vec![0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07]);
        assert!(alg.parameters_oid().unwrap().is(known::SECP256R1));
    }
}
