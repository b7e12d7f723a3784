extern crate certview;

use std::env;
use std::process;

use certview::{Certificate, CertificateView, DisplayOptions};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: show_cert <certificate.pem|certificate.cer>");
            process::exit(2);
        }
    };

    if let Err(err) = show(&path) {
        eprintln!("{}: {}", path, err);
        process::exit(1);
    }
}

fn show(path: &str) -> certview::x509::CertResult<()> {
    let cert = Certificate::load(path)?;
    let view = CertificateView::from_certificate(&cert, &DisplayOptions::default());
    print!("{}", view);
    Ok(())
}
