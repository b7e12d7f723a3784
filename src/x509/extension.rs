use crate::der::{Tag, FromTlv, DerResult, DerReader, ObjId, Integer};
use crate::der::DerErrorKind::InvalidTag;

// Extension ::= SEQUENCE {
//     extn_id OBJECT IDENTIFIER,
//     critical BOOLEAN DEFAULT FALSE,
//     extn_value OCTET STRING
// }
// where `extn_value` is DER blob determined by extn_id.
// note that this is different to `ANY` since it is wrapped in OctetString.
sequence_opts!(struct Extension {
    extn_id(): ObjId,
    critical(DEFAULT, false, Tag::Boolean): bool,
    extn_value(): Vec<u8>,
});

impl Extension {
    /// Decode the wrapped value. It must be exactly one TLV.
    pub fn decode<T: FromTlv>(&self) -> DerResult<T> {
        let mut ext_reader = DerReader::new(&self.extn_value);
        let (ext_tag, ext_value) = ext_reader.next_tlv()?;
        debug!("extension {} tag {:?} len {}", self.extn_id, ext_tag, ext_value.len());
        let result: T = FromTlv::from_tlv(ext_tag, ext_value)?;
        if !ext_reader.is_eof() {
            return der_err!(InvalidTag, "too many TLV elements in extension {}", self.extn_id);
        }
        Ok(result)
    }
}

// seems that some OCSP responses contain empty ExtensionList.
// https://bugzilla.mozilla.org/show_bug.cgi?id=997994
sequence_of!(struct ExtensionList = Extension(1));

impl ExtensionList {
    pub fn find(&self, extn_id: &str) -> Option<&Extension> {
        self.seq.iter().find(|ext| ext.extn_id.is(extn_id))
    }
}

// 4.2.1.3
bit_string_fields!(struct KeyUsage {
    digital_signature(0),
    // also known as non_repudiation.
    content_commitment(1),
    key_encipherment(2),
    data_encipherment(3),
    key_agreement(4),
    key_cert_sign(5),
    crl_sign(6),
    encipher_only(7),
    decipher_only(8),
});

// 4.2.1.9
sequence_opts!(struct BasicConstraints {
    ca(DEFAULT, false, Tag::Boolean): bool,
    path_len_constraint(OPTIONAL, Tag::Integer): Option<Integer>,
});
