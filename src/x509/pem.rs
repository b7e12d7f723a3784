use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};
use rustc_serialize::base64::{self, FromBase64};

#[derive(Debug)]
pub enum PemError {
    IoError(io::Error),
    FormatError,
    Base64Error(base64::FromBase64Error),
}

impl fmt::Display for PemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PemError::IoError(ref err) => write!(f, "io failure: {}", err),
            PemError::FormatError => f.write_str("cannot parse PEM header or footer"),
            PemError::Base64Error(ref err) => write!(f, "cannot decode base64: {}", err),
        }
    }
}

impl Error for PemError {
    fn description(&self) -> &str {
        match *self {
            PemError::IoError(..) => "io failure",
            PemError::FormatError => "cannot parse PEM header or footer",
            PemError::Base64Error(..) => "cannot decode base64",
        }
    }
}

impl From<io::Error> for PemError {
    fn from(err: io::Error) -> PemError {
        PemError::IoError(err)
    }
}

impl From<base64::FromBase64Error> for PemError {
    fn from(err: base64::FromBase64Error) -> PemError {
        PemError::Base64Error(err)
    }
}

pub type PemResult<T> = Result<T, PemError>;

/// Iterates `(label, body)` of every `-----BEGIN <label>-----` block.
/// Text outside of blocks is skipped, as openssl does.
pub struct PemReader<R> {
    inner: R,
}

impl<R: BufRead> PemReader<R> {
    pub fn new(inner: R) -> PemReader<R> {
        PemReader {
            inner,
        }
    }

    // None on eof
    fn read_line(&mut self) -> PemResult<Option<String>> {
        let mut line = String::new();
        let read = self.inner.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end().to_owned()))
    }
}

fn boundary<'a>(line: &'a str, kind: &str) -> Option<&'a str> {
    line.strip_prefix("-----")?
        .strip_suffix("-----")?
        .strip_prefix(kind)?
        .strip_prefix(' ')
}

impl<R: BufRead> Iterator for PemReader<R> {
    type Item = PemResult<(String, Vec<u8>)>;

    fn next(&mut self) -> Option<PemResult<(String, Vec<u8>)>> {
        // return Err(PemError::FormatError) if expectation fails.
        macro_rules! pem_expect {
            ($actual:expr, $exp:expr) => ({
                if $exp != $actual {
                    return Some(Err(PemError::FormatError));
                }
            })
        }

        macro_rules! try_opt {
            ($e:expr) => ({
                match $e {
                    Ok(e) => e,
                    Err(e) => return Some(Err(From::from(e))),
                }
            })
        }

        let label = loop {
            let line = try_opt!(self.read_line())?;
            if let Some(label) = boundary(&line, "BEGIN") {
                break label.to_owned();
            }
        };

        let mut body = String::new();
        loop {
            let line = match try_opt!(self.read_line()) {
                Some(line) => line,
                None => return Some(Err(PemError::FormatError)),
            };
            if line.starts_with("-----") {
                pem_expect!(boundary(&line, "END"), Some(&label[..]));
                break;
            }
            // RFC 1421 headers, e.g. `Proc-Type: 4,ENCRYPTED`
            if line.contains(':') {
                continue;
            }
            body.push_str(line.trim());
        }

        let body = try_opt!(body.from_base64());
        debug!("PEM block {:?}, {} bytes", label, body.len());
        Some(Ok((label, body)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}
