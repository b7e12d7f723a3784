use std::fs;
use std::path::Path;

use crate::der::{Tag, FromTlv, DerReader, BitString};
use crate::known;

use super::{CertResult, CertError, CertErrorKind};
use super::alg_id::AlgorithmIdentifier;
use super::version::Version;
use super::name::Name;
use super::validity::Validity;
use super::public_key::SubjectPublicKeyInfo;
use super::extension::{Extension, ExtensionList, BasicConstraints};
use super::cert_serial_number::CertificateSerialNumber;
use super::pem::PemReader;

sequence_opts!(struct TbsCertificate {
    version(EXPLICIT_DEFAULT[C:0], Version::Version1): Version,
    serial_number(): CertificateSerialNumber,
    signature(): AlgorithmIdentifier,
    issuer(): Name,
    validity(): Validity,
    subject(): Name,
    subject_pub_key_info(): SubjectPublicKeyInfo,

    // If present, version MUST be v2 or v3
    issuer_unique_id(IMPLICIT_OPTIONAL[P:1], Tag::BitString): Option<BitString>,
    subject_unique_id(IMPLICIT_OPTIONAL[P:2], Tag::BitString):  Option<BitString>,

    extensions(EXPLICIT_OPTIONAL[C:3]): Option<ExtensionList>,
});

impl TbsCertificate {
    pub fn extension(&self, extn_id: &str) -> Option<&Extension> {
        self.extensions.as_ref().and_then(|list| list.find(extn_id))
    }

    /// `None` if absent or undecodable.
    pub fn basic_constraints(&self) -> Option<BasicConstraints> {
        let ext = self.extension(known::BASIC_CONSTRAINTS)?;
        match ext.decode() {
            Ok(bc) => Some(bc),
            Err(err) => {
                debug!("cannot decode BasicConstraints: {}", err);
                None
            }
        }
    }

    /// A CA certificate issued by itself.
    pub fn is_root(&self) -> bool {
        let ca = self.basic_constraints().map_or(false, |bc| bc.ca);
        ca && self.subject == self.issuer
    }
}

#[derive(Debug)]
pub struct Certificate {
    pub tbs_cert: TbsCertificate,
    pub sig_alg: AlgorithmIdentifier,
    pub sig_val: BitString,
    /// Whole DER encoding, as fingerprints are taken over it.
    pub der: Vec<u8>,
}

impl Certificate {
    /// Parse Certificate from DER bytes. Trailing bytes are an error.
    pub fn parse(cert: &[u8]) -> CertResult<Certificate> {
        let mut parser = DerReader::new(cert);
        let (tag, value, raw) = parser.next_tlv_raw()?;
        if tag != Tag::Sequence {
            return CertError::new(CertErrorKind::ParseError,
                                  format!("expected Sequence, found {:?}", tag));
        }
        if !parser.is_eof() {
            return CertError::new(CertErrorKind::ParseError,
                                  "trailing data after certificate".to_owned());
        }

        let mut seq = DerReader::new(value);
        let (tag, value) = seq.next_tlv()?;
        let tbs_cert: TbsCertificate = FromTlv::from_tlv(tag, value)?;
        let (tag, value) = seq.next_tlv()?;
        let sig_alg: AlgorithmIdentifier = FromTlv::from_tlv(tag, value)?;
        let (tag, value) = seq.next_tlv()?;
        let sig_val: BitString = FromTlv::from_tlv(tag, value)?;
        if !seq.is_eof() {
            return CertError::new(CertErrorKind::ParseError,
                                  "unexpected element in Certificate".to_owned());
        }

        if tbs_cert.version == Version::Version1 && tbs_cert.extensions.is_some() {
            return CertError::new(CertErrorKind::InvalidField,
                                  "extensions in v1 certificate".to_owned());
        }

        Ok(Certificate {
            tbs_cert,
            sig_alg,
            sig_val,
            der: raw.to_vec(),
        })
    }

    /// Parse the first `CERTIFICATE` block of PEM text.
    pub fn from_pem(text: &str) -> CertResult<Certificate> {
        for block in PemReader::new(text.as_bytes()) {
            let (label, body) = block?;
            if label == "CERTIFICATE" {
                return Certificate::parse(&body);
            }
            debug!("skipping PEM block {:?}", label);
        }
        CertError::new(CertErrorKind::ParseError, "no CERTIFICATE block found".to_owned())
    }

    /// Load a PEM or raw DER (`.cer`) certificate file.
    pub fn load<P: AsRef<Path>>(path: P) -> CertResult<Certificate> {
        let path = path.as_ref();
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                return CertError::new(CertErrorKind::LoadError,
                                      format!("{}: {}", path.display(), err));
            }
        };

        // DER starts with 0x30, never with text
        match String::from_utf8(data) {
            Ok(ref text) if text.contains("-----BEGIN") => Certificate::from_pem(text),
            Ok(text) => Certificate::parse(text.as_bytes()),
            Err(err) => Certificate::parse(err.as_bytes()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Certificate;
    use crate::x509::CertErrorKind;

    #[test]
    fn test_not_a_certificate() {
        assert_err!(Certificate::parse(&[0x05, 0x00]), CertErrorKind::ParseError);
        assert_err!(Certificate::parse(&[0x30, 0x00]), CertErrorKind::ParseError);
        assert_err!(Certificate::parse(&[]), CertErrorKind::ParseError);
        assert_err!(Certificate::from_pem("hello"), CertErrorKind::ParseError);
        assert_err!(Certificate::load("testdata/does-not-exist.pem"), CertErrorKind::LoadError);
    }
}
