use crate::oid;
use crate::x509::Certificate;
use crate::x509::version::Version;
use crate::viewer::{CertificateView, DisplayOptions, Section};

static EC_LEAF: &str = include_str!("../testdata/ec-leaf.pem");
static RSA_ROOT: &str = include_str!("../testdata/rsa-root.pem");

fn view(pem: &str) -> CertificateView {
    let cert = Certificate::from_pem(pem).unwrap();
    CertificateView::from_certificate(&cert, &DisplayOptions::default())
}

fn section<'a>(view: &'a CertificateView, title: &str) -> &'a Section {
    match view.section(title) {
        Some(section) => section,
        None => panic!("no section {:?}", title),
    }
}

#[test]
fn test_section_order() {
    let view = view(EC_LEAF);
    let titles: Vec<&str> = view.sections().iter().map(|s| &s.title[..]).collect();
    assert_eq!(titles, vec!["Subject Name", "Issuer Name", "Common Info", "Validity Dates",
                            "Public Key info", "Signature", "Fingerprints"]);
}

#[test]
fn test_ec_names() {
    let view = view(EC_LEAF);
    for &title in ["Subject Name", "Issuer Name"].iter() {
        let rows: Vec<(&str, &str)> = section(&view, title).values.iter()
            .map(|kv| (&kv.title[..], &kv.value[..]))
            .collect();
        assert_eq!(rows, vec![
            ("Country or Region", "US"),
            ("State/Province", "California"),
            ("Locality", "San Francisco"),
            ("Organization", "Example Org"),
            ("Organizational Unit", "Security"),
            ("Organizational Unit", "Web"),
            ("Common Name", "leaf.example.com"),
            ("Domain Component", "example"),
            ("Domain Component", "com"),
        ]);
    }
}

#[test]
fn test_rsa_names() {
    let view = view(RSA_ROOT);
    let subject = section(&view, "Subject Name");
    assert_eq!(subject.values.len(), 3);
    assert_eq!(subject.value("Country or Region"), Some("DE"));
    assert_eq!(subject.values("Organization"), vec!["Example Root Authority"]);
    assert_eq!(subject.value("Common Name"), Some("Example Root CA"));
    // empty rows are left out
    assert_eq!(subject.value("Locality"), None);
}

#[test]
fn test_common_info() {
    let view = view(EC_LEAF);
    let info = section(&view, "Common Info");
    assert_eq!(info.value("Serial Number"), Some("4660"));
    assert_eq!(info.value("Version"), Some("3"));
    assert_eq!(info.value("Signature Algorithm"),
               Some("SHA-256 with ECDSA Encryption (1.2.840.10045.4.3.2)"));
    assert_eq!(info.value("Parameters"), Some("None"));

    let view = self::view(RSA_ROOT);
    let info = section(&view, "Common Info");
    assert_eq!(info.value("Serial Number"),
               Some("F1 E2 D3 C4 B5 A6 97 88 79 6A 5B 4C 3D 2E 1F 00"));
    assert_eq!(info.value("Signature Algorithm"),
               Some("SHA-256 with RSA Encryption (1.2.840.113549.1.1.11)"));
    // NULL parameters
    assert_eq!(info.value("Parameters"), Some("None"));
}

#[test]
fn test_validity() {
    let view = view(RSA_ROOT);
    let validity = section(&view, "Validity Dates");
    assert_eq!(validity.value("Not Valid Before"), Some("Monday, January 1, 2024 at 12:00:00 AM UTC"));
    assert_eq!(validity.value("Not Valid After"), Some("Sunday, January 1, 2034 at 12:00:00 AM UTC"));
}

#[test]
fn test_ec_public_key() {
    let view = view(EC_LEAF);
    let key = section(&view, "Public Key info");
    assert_eq!(key.value("Algorithm"), Some("EC - P-256 Encryption (1.2.840.10045.2.1)"));
    assert_eq!(key.value("Parameters"), Some("10 bytes : 06 08 2A 86 48 CE 3D 03 01 07"));
    let public_key = key.value("Public Key").unwrap();
    assert!(public_key.starts_with("65 bytes : 04 F6 91 1F"));
    assert!(public_key.ends_with("7E 6D 54"));
    assert_eq!(key.value("Exponent"), None);
    assert_eq!(key.value("Key Size"), Some("256 bits"));
    assert_eq!(key.value("Key Usage"), Some("Verify Derive"));
}

#[test]
fn test_rsa_public_key() {
    let view = view(RSA_ROOT);
    let key = section(&view, "Public Key info");
    assert_eq!(key.value("Algorithm"), Some("RSA Encryption (1.2.840.113549.1.1.1)"));
    assert_eq!(key.value("Parameters"), Some("None"));
    assert!(key.value("Public Key").unwrap().starts_with("270 bytes : 30 82 01 0A 02 82 01 01 00 A6 54"));
    assert_eq!(key.value("Exponent"), Some("65537"));
    assert_eq!(key.value("Key Size"), Some("2048 bits"));
    assert_eq!(key.value("Key Usage"), Some("Verify"));
}

#[test]
fn test_signature() {
    let view = view(EC_LEAF);
    let sig = section(&view, "Signature").value("Signature").unwrap();
    assert!(sig.starts_with("70 bytes : 30 44 02 20 15 E0"));

    let view = self::view(RSA_ROOT);
    let sig = section(&view, "Signature").value("Signature").unwrap();
    assert!(sig.starts_with("256 bytes : 29 C3 FC 8D"));
    assert!(sig.ends_with("90 0C B3 AE"));
}

#[test]
fn test_fingerprints() {
    let options = DisplayOptions { hex_separator: ":".to_owned(), ..Default::default() };

    let cert = Certificate::from_pem(EC_LEAF).unwrap();
    let view = CertificateView::from_certificate(&cert, &options);
    let fingerprints = section(&view, "Fingerprints");
    assert_eq!(fingerprints.value("SHA-256"),
               Some("F4:80:3A:E5:55:3C:AF:75:DD:DC:DB:4F:CA:89:07:76:\
                     82:72:18:53:0D:C9:BB:33:95:31:28:44:C1:B0:59:0E"));
    assert_eq!(fingerprints.value("SHA-1"),
               Some("C4:61:20:1A:1A:64:3C:1E:43:07:E5:F6:3B:DF:79:BC:8A:3F:9D:85"));

    let cert = Certificate::from_pem(RSA_ROOT).unwrap();
    let view = CertificateView::from_certificate(&cert, &options);
    let fingerprints = section(&view, "Fingerprints");
    assert_eq!(fingerprints.value("SHA-256"),
               Some("B3:61:5D:73:4C:0B:6B:63:1D:F1:29:69:13:B1:46:D9:\
                     78:75:44:15:5B:2B:73:D5:5D:81:BF:DC:38:E1:1B:BA"));
    assert_eq!(fingerprints.value("SHA-1"),
               Some("6E:22:86:80:A9:4C:8F:0E:8B:60:C0:7D:94:E7:32:D0:91:9D:C7:37"));
}

#[test]
fn test_certificate_model() {
    let cert = Certificate::from_pem(RSA_ROOT).unwrap();
    assert_eq!(cert.der.len(), 898);
    assert_eq!(cert.tbs_cert.version, Version::Version3);
    assert!(cert.tbs_cert.subject_pub_key_info.is_rsa());
    assert_eq!(cert.tbs_cert.extensions.as_ref().map(|list| list.seq.len()), Some(4));

    // algorithm oid bytes, as the codec sees them
    let sig_oid = cert.sig_alg.algorithm.to_ber();
    assert_eq!(oid::decode(&sig_oid).unwrap(), "1.2.840.113549.1.1.11");
    assert_eq!(oid::encode("1.2.840.113549.1.1.11").unwrap(), sig_oid);
}

#[test]
fn test_der_roundtrip() {
    let cert = Certificate::from_pem(EC_LEAF).unwrap();
    assert_eq!(cert.der.len(), 713);
    let view = CertificateView::from_der(&cert.der).unwrap();
    assert_eq!(section(&view, "Common Info").value("Serial Number"), Some("4660"));

    // trailing garbage
    let mut der = cert.der.clone();
    der.push(0);
    assert!(Certificate::parse(&der).is_err());
    // truncated
    assert!(Certificate::parse(&cert.der[..cert.der.len() - 1]).is_err());
}

#[test]
fn test_load() {
    let cert = Certificate::load("testdata/rsa-root.pem").unwrap();
    assert_eq!(cert.der.len(), 898);
}

#[test]
fn test_title() {
    let leaf = view(EC_LEAF);
    assert_eq!(leaf.title(), "leaf.example.com");
    // self-issued, but not a CA
    assert!(!leaf.is_root());

    let root = view(RSA_ROOT);
    assert_eq!(root.title(), "Example Root CA");
    assert!(root.is_root());

    let cert = Certificate::from_pem(RSA_ROOT).unwrap();
    let bc = cert.tbs_cert.basic_constraints().unwrap();
    assert!(bc.ca);
    assert!(cert.tbs_cert.subject == cert.tbs_cert.issuer);
    let cert = Certificate::from_pem(EC_LEAF).unwrap();
    assert!(!cert.tbs_cert.basic_constraints().unwrap().ca);
}

#[test]
fn test_display() {
    let text = format!("{}", view(EC_LEAF));
    assert!(text.starts_with("leaf.example.com\n\nSubject Name\n    Country or Region: US\n"));
    assert!(text.contains("\n\nCommon Info\n    Serial Number: 4660\n    Version: 3\n"));
    assert!(text.contains("    Key Usage: Verify Derive\n"));

    let text = format!("{}", view(RSA_ROOT));
    assert!(text.starts_with("Example Root CA\nRoot certificate\n\nSubject Name\n"));
}
