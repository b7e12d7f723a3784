use std::error::Error;
use std::fmt;

use crate::der;
use crate::oid;

use self::pem::PemError;

#[derive(PartialEq, Debug)]
pub enum CertErrorKind {
    ParseError,
    InvalidField,
    LoadError,
}

#[derive(Debug)]
pub struct CertError {
    pub kind: CertErrorKind,
    pub desc: String,
}

impl CertError {
    pub fn new<T>(kind: CertErrorKind, desc: String) -> CertResult<T> {
        Err(CertError {
            kind,
            desc,
        })
    }
}

impl Error for CertError {
    fn description(&self) -> &str {
        match self.kind {
            CertErrorKind::ParseError => "DER parse error",
            CertErrorKind::InvalidField => "field has invalid value",
            CertErrorKind::LoadError => "cannot read certificate",
        }
    }
}

impl fmt::Display for CertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.desc.fmt(f)
    }
}

impl From<der::DerError> for CertError {
    fn from(err: der::DerError) -> CertError {
        CertError {
            kind: CertErrorKind::ParseError,
            desc: format!("{:?}", err),
        }
    }
}

impl From<oid::OidError> for CertError {
    fn from(err: oid::OidError) -> CertError {
        CertError {
            kind: CertErrorKind::InvalidField,
            desc: format!("{:?}", err),
        }
    }
}

impl From<PemError> for CertError {
    fn from(err: PemError) -> CertError {
        let kind = match err {
            PemError::IoError(..) => CertErrorKind::LoadError,
            _ => CertErrorKind::ParseError,
        };
        CertError {
            kind,
            desc: format!("{}", err),
        }
    }
}

pub type CertResult<T> = Result<T, CertError>;

pub mod cert_serial_number;
pub mod version;
pub mod alg_id;
pub mod name;
pub mod validity;
pub mod public_key;
pub mod extension;
pub mod certificate;
pub mod pem;

pub use self::certificate::{Certificate, TbsCertificate};
