//! Certificate details as titled sections of display rows.
//!
//! Every row is a plain string. Fields that cannot be decoded degrade to an
//! omitted row (with a `warn!`) instead of failing the whole view.

use std::fmt::{self, Write};

use rustc_serialize::hex::ToHex;

use crate::crypto::sha1::sha1;
use crate::crypto::sha2::sha256;
use crate::der::Time;
use crate::known;
use crate::oid;
use crate::x509::{Certificate, CertResult};
use crate::x509::alg_id::AlgorithmIdentifier;
use crate::x509::cert_serial_number::CertificateSerialNumber;
use crate::x509::extension::KeyUsage;
use crate::x509::name::Name;

#[derive(Clone, Debug)]
pub struct DisplayOptions {
    /// Put between hex octet pairs.
    pub hex_separator: String,
    /// chrono `strftime`-style format for validity dates.
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> DisplayOptions {
        DisplayOptions {
            hex_separator: " ".to_owned(),
            date_format: "%A, %B %-d, %Y at %-I:%M:%S %p %Z".to_owned(),
        }
    }
}

/// Split `hex` into pairs joined by `separator`. An odd last digit stays alone.
pub fn format_hex(hex: &str, separator: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    let pairs: Vec<String> = chars.chunks(2).map(|pair| pair.iter().collect()).collect();
    pairs.join(separator)
}

fn hex_bytes(bytes: &[u8], separator: &str) -> String {
    format_hex(&bytes.to_hex().to_uppercase(), separator)
}

/// Decimal if the serial is a non-negative 64-bit value, hex octets otherwise.
pub fn format_serial_number(serial: &CertificateSerialNumber, separator: &str) -> String {
    match serial.to_u64() {
        Some(val) => val.to_string(),
        None => hex_bytes(serial.unsigned_bytes(), separator),
    }
}

pub fn format_date(time: &Time, options: &DisplayOptions) -> String {
    let mut out = String::new();
    match write!(out, "{}", time.time.format(&options.date_format)) {
        Ok(()) => out,
        Err(..) => {
            warn!("invalid date format {:?}", options.date_format);
            time.time.to_rfc3339()
        }
    }
}

fn sized_hex(bytes: &[u8], separator: &str) -> String {
    format!("{} bytes : {}", bytes.len(), hex_bytes(bytes, separator))
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub title: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub values: Vec<KeyValue>,
}

impl Section {
    fn new(title: &str, rows: Vec<(&str, String)>) -> Section {
        let values = rows.into_iter()
                         .filter(|&(_, ref value)| !value.is_empty())
                         .map(|(title, value)| KeyValue { title: title.to_owned(), value })
                         .collect();
        Section {
            title: title.to_owned(),
            values,
        }
    }

    /// First row with the given title.
    pub fn value(&self, title: &str) -> Option<&str> {
        self.values.iter().find(|kv| kv.title == title).map(|kv| &kv.value[..])
    }

    /// All rows with the given title, in order.
    pub fn values(&self, title: &str) -> Vec<&str> {
        self.values.iter().filter(|kv| kv.title == title).map(|kv| &kv.value[..]).collect()
    }
}

#[derive(Clone, Debug)]
pub struct CertificateView {
    title: String,
    is_root: bool,
    sections: Vec<Section>,
}

impl CertificateView {
    pub fn from_der(der: &[u8]) -> CertResult<CertificateView> {
        CertificateView::from_der_with_options(der, &DisplayOptions::default())
    }

    pub fn from_der_with_options(der: &[u8], options: &DisplayOptions) -> CertResult<CertificateView> {
        let cert = Certificate::parse(der)?;
        Ok(CertificateView::from_certificate(&cert, options))
    }

    pub fn from_certificate(cert: &Certificate, options: &DisplayOptions) -> CertificateView {
        let tbs = &cert.tbs_cert;
        let sep = &options.hex_separator[..];

        let sections = vec![
            name_section("Subject Name", &tbs.subject),
            name_section("Issuer Name", &tbs.issuer),
            Section::new("Common Info", vec![
                ("Serial Number", format_serial_number(&tbs.serial_number, sep)),
                ("Version", tbs.version.number().to_string()),
                ("Signature Algorithm", signature_algorithm(&cert.sig_alg)),
                ("Parameters", match cert.sig_alg.parameters_der() {
                    Some(der) => hex_bytes(&der, sep),
                    None => "None".to_owned(),
                }),
            ]),
            Section::new("Validity Dates", vec![
                ("Not Valid Before", format_date(&tbs.validity.not_before, options)),
                ("Not Valid After", format_date(&tbs.validity.not_after, options)),
            ]),
            public_key_section(cert, sep),
            Section::new("Signature", vec![
                ("Signature", sized_hex(&cert.sig_val.data, sep)),
            ]),
            Section::new("Fingerprints", vec![
                ("SHA-256", hex_bytes(&sha256(&cert.der), sep)),
                ("SHA-1", hex_bytes(&sha1(&cert.der), sep)),
            ]),
        ];

        CertificateView {
            title: tbs.subject.value(known::COMMON_NAME).unwrap_or_default(),
            is_root: tbs.is_root(),
            sections,
        }
    }

    /// Subject common name, empty if there is none.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}

impl fmt::Display for CertificateView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.title.is_empty() {
            writeln!(f, "{}", self.title)?;
        }
        if self.is_root {
            writeln!(f, "Root certificate")?;
        }
        if !self.title.is_empty() || self.is_root {
            writeln!(f)?;
        }
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", section.title)?;
            for kv in section.values.iter() {
                writeln!(f, "    {}: {}", kv.title, kv.value)?;
            }
        }
        Ok(())
    }
}

fn name_section(title: &str, name: &Name) -> Section {
    let first = |attr_type: &str| name.value(attr_type).unwrap_or_default();

    let mut rows = vec![
        ("Country or Region", first(known::COUNTRY_NAME)),
        ("State/Province", first(known::STATE_OR_PROVINCE_NAME)),
        ("Locality", first(known::LOCALITY_NAME)),
    ];
    rows.extend(name.values(known::ORGANIZATION_NAME).into_iter().map(|v| ("Organization", v)));
    rows.extend(name.values(known::ORGANIZATIONAL_UNIT_NAME).into_iter()
                    .map(|v| ("Organizational Unit", v)));
    rows.push(("Common Name", first(known::COMMON_NAME)));
    rows.extend(name.values(known::STREET_ADDRESS).into_iter().map(|v| ("Street Address", v)));
    rows.extend(name.values(known::DOMAIN_COMPONENT).into_iter().map(|v| ("Domain Component", v)));
    rows.push(("User ID", first(known::USER_ID)));

    Section::new(title, rows)
}

// `oid::decode` takes the full TLV, so go through the raw bytes.
fn dotted(alg: &AlgorithmIdentifier) -> String {
    oid::decode_lossy(&alg.algorithm.to_ber())
}

fn signature_algorithm(alg: &AlgorithmIdentifier) -> String {
    let dotted = dotted(alg);
    match known::signature_algorithm(&dotted) {
        Some(("", name)) => format!("{} Encryption ({})", name, dotted),
        Some((digest, name)) => format!("{} with {} Encryption ({})", digest, name, dotted),
        None => {
            warn!("unknown signature algorithm {}", alg.algorithm);
            dotted
        }
    }
}

fn public_key_section(cert: &Certificate, sep: &str) -> Section {
    let spki = &cert.tbs_cert.subject_pub_key_info;
    let dotted = dotted(&spki.alg);

    let algorithm = match known::key_algorithm(&dotted) {
        Some(name) => {
            let curve = spki.alg.parameters_oid()
                            .and_then(|id| id.to_absolute().ok())
                            .and_then(|id| known::curve(&id));
            match curve {
                Some((curve, _)) => format!("{} - {} Encryption ({})", name, curve, dotted),
                None => format!("{} Encryption ({})", name, dotted),
            }
        }
        None => {
            warn!("unknown key algorithm {}", spki.alg.algorithm);
            dotted
        }
    };

    let parameters = match spki.alg.parameters_der() {
        Some(der) => sized_hex(&der, sep),
        None => "None".to_owned(),
    };

    let exponent = if spki.is_rsa() {
        match spki.rsa_public_key() {
            Ok(key) => match key.public_exponent.to_u64() {
                Some(0) | None => String::new(),
                Some(e) => e.to_string(),
            },
            Err(err) => {
                warn!("cannot decode RSA public key: {}", err);
                String::new()
            }
        }
    } else {
        String::new()
    };

    let key_size = match spki.key_size() {
        Some(bits) => format!("{} bits", bits),
        None => {
            warn!("unknown key size for {}", spki.alg.algorithm);
            String::new()
        }
    };

    Section::new("Public Key info", vec![
        ("Algorithm", algorithm),
        ("Parameters", parameters),
        ("Public Key", sized_hex(&spki.subject_pub_key.data, sep)),
        ("Exponent", exponent),
        ("Key Size", key_size),
        ("Key Usage", key_usage(cert)),
    ])
}

fn key_usage(cert: &Certificate) -> String {
    let usage: KeyUsage = match cert.tbs_cert.extension(known::KEY_USAGE) {
        None => KeyUsage::default(),
        Some(ext) => match ext.decode() {
            Ok(usage) => usage,
            Err(err) => {
                warn!("cannot decode KeyUsage: {}", err);
                KeyUsage::default()
            }
        },
    };

    let mut usages = Vec::new();
    if usage.data_encipherment {
        usages.push("Encrypt");
    }
    if usage.digital_signature || usage.content_commitment || usage.key_cert_sign || usage.crl_sign {
        usages.push("Verify");
    }
    if usage.key_encipherment {
        usages.push("Wrap");
    }
    if usage.key_agreement {
        usages.push("Derive");
    }
    if usages.is_empty() {
        usages.push("Any");
    }
    usages.join(" ")
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::{format_hex, format_serial_number, format_date, DisplayOptions};
    use crate::der::{FromValue, Time};
    use crate::x509::cert_serial_number::CertificateSerialNumber;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex("", " "), "");
        assert_eq!(format_hex("a", " "), "a");
        assert_eq!(format_hex("0a1b2c", " "), "0a 1b 2c");
        assert_eq!(format_hex("0a1b2", ":"), "0a:1b:2");
        assert_eq!(format_hex("0a1b", ""), "0a1b");
    }

    #[test]
    fn test_format_serial_number() {
        let serial = |v: &[u8]| CertificateSerialNumber::from_value(v).unwrap();
        assert_eq!(format_serial_number(&serial(&[0x12, 0x34]), " "), "4660");
        assert_eq!(format_serial_number(&serial(&[0x00, 0xff]), " "), "255");
        assert_eq!(format_serial_number(&serial(&[0x7f; 8]), " "), "9187201950435737471");
        assert_eq!(format_serial_number(&serial(&[0x00, 0xf1, 0xe2, 0xd3, 0xc4, 0xb5, 0xa6, 0x97,
                                                  0x88, 0x79]), ":"),
                   "F1:E2:D3:C4:B5:A6:97:88:79");
        // negative
        assert_eq!(format_serial_number(&serial(&[0x9a]), " "), "9A");
    }

    #[test]
    fn test_format_date() {
        let time = Time { time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap() };
        assert_eq!(format_date(&time, &DisplayOptions::default()),
                   "Monday, January 1, 2024 at 12:00:00 AM UTC");

        let time = Time { time: Utc.with_ymd_and_hms(2049, 12, 31, 23, 59, 1).single().unwrap() };
        let options = DisplayOptions { date_format: "%Y-%m-%d %H:%M:%S".to_owned(), ..Default::default() };
        assert_eq!(format_date(&time, &options), "2049-12-31 23:59:01");
    }
}
