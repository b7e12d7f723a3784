#![crate_type = "lib"]
#![crate_name = "certview"]

#![allow(missing_copy_implementations)]

#[macro_use]
extern crate log;
extern crate chrono;
extern crate rustc_serialize;

pub use x509::Certificate;
pub use viewer::{CertificateView, DisplayOptions};

// matches on `.kind` of the error, panics otherwise.
#[cfg(test)]
macro_rules! assert_err {
    ($e:expr, $expected:expr) => ({
        match $e {
            Err(ref e) if e.kind == $expected => {}
            Err(e) => panic!("expected {:?}, found {:?}", $expected, e),
            Ok(..) => panic!("expected {:?}, found Ok", $expected),
        }
    })
}

// OBJECT IDENTIFIER codec
pub mod oid;
pub mod known;

#[macro_use]
pub mod der;
pub mod x509;

// digests for fingerprints
pub mod crypto;

pub mod viewer;

#[cfg(test)] mod test;
