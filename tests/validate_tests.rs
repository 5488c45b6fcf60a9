//! End-to-end validation tests against OpenSSL-generated fixtures.

use std::path::PathBuf;

use x509v3::cert::parse;
use x509v3::cert::validate::{validate, ValidationErrorKind};
use x509v3::crypto::TystCryptoProvider;

fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

fn load_b64_file(name: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/resources");
    path.push(name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("missing test fixture {}", path.display()));
    tyst::encdec::base64::decode(contents.trim()).expect("fixture is not valid base64")
}

// 2027-01-01T00:00:00Z: inside every fixture's [notBefore, notAfter] window.
const AT_EPOCH_SECONDS: i64 = 1798761600;

#[test]
fn validates_rsa_leaf_against_its_ca() {
    init_logger();
    let leaf_der = load_b64_file("leaf_cert.b64");
    let ca_der = load_b64_file("ca_cert.b64");
    let leaf = parse::parse(&leaf_der).unwrap();
    let ca = parse::parse(&ca_der).unwrap();
    validate(&leaf, &ca, AT_EPOCH_SECONDS, &TystCryptoProvider).unwrap();
}

#[test]
fn validates_ec_leaf_against_its_ca() {
    init_logger();
    let leaf_der = load_b64_file("ec_leaf.b64");
    let ca_der = load_b64_file("ec_ca.b64");
    let leaf = parse::parse(&leaf_der).unwrap();
    let ca = parse::parse(&ca_der).unwrap();
    validate(&leaf, &ca, AT_EPOCH_SECONDS, &TystCryptoProvider).unwrap();
}

#[test]
fn validates_self_signed_v1_certificate() {
    init_logger();
    let der = load_b64_file("v1_selfsigned.b64");
    let cert = parse::parse(&der).unwrap();
    validate(&cert, &cert, AT_EPOCH_SECONDS, &TystCryptoProvider).unwrap();
}

#[test]
fn rejects_leaf_validated_against_unrelated_issuer() {
    init_logger();
    let leaf_der = load_b64_file("leaf_cert.b64");
    let unrelated_ca_der = load_b64_file("ec_ca.b64");
    let leaf = parse::parse(&leaf_der).unwrap();
    let unrelated = parse::parse(&unrelated_ca_der).unwrap();
    let err = validate(&leaf, &unrelated, AT_EPOCH_SECONDS, &TystCryptoProvider).unwrap_err();
    assert!(matches!(err.kind(), ValidationErrorKind::IssuerMismatch));
}

#[test]
fn rejects_certificate_outside_its_validity_window() {
    init_logger();
    let leaf_der = load_b64_file("leaf_cert.b64");
    let ca_der = load_b64_file("ca_cert.b64");
    let leaf = parse::parse(&leaf_der).unwrap();
    let ca = parse::parse(&ca_der).unwrap();
    let long_after_expiry = 4102444800; // 2100-01-01T00:00:00Z
    let err = validate(&leaf, &ca, long_after_expiry, &TystCryptoProvider).unwrap_err();
    assert!(matches!(err.kind(), ValidationErrorKind::CertExpired));
}
