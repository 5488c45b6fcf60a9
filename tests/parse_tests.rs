//! End-to-end parsing tests against OpenSSL-generated fixtures.

use std::path::PathBuf;

use x509v3::cert::parse;
use x509v3::cert::parse::Version;

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

#[test]
fn parses_v3_leaf_certificate() {
    init_logger();
    let der = load_b64_file("leaf_cert.b64");
    let cert = parse::parse(&der).unwrap();
    assert_eq!(cert.version, Version::V3);
    assert_eq!(
        cert.subject.common_name.map(|s| s.content.to_vec()),
        Some(b"example.com".to_vec())
    );
    assert!(cert.extensions.basic_constraints.is_some());
    assert!(!cert.extensions.basic_constraints.unwrap().is_ca());
    assert!(cert.extensions.subject_alt_name.is_some());
    assert!(cert.extensions.extended_key_usage.is_some());
    assert!(cert.extensions.authority_key_identifier.is_some());
    assert!(cert.extensions.subject_key_identifier.is_some());
}

#[test]
fn parses_v3_ca_certificate() {
    init_logger();
    let der = load_b64_file("ca_cert.b64");
    let cert = parse::parse(&der).unwrap();
    assert_eq!(cert.version, Version::V3);
    let basic_constraints = cert.extensions.basic_constraints.unwrap();
    assert!(basic_constraints.is_ca());
    let key_usage = cert.extensions.key_usage.unwrap();
    assert!(key_usage.is_set(x509v3::cert::extensions::KeyUsage::KeyCertSign));
}

#[test]
fn parses_ec_leaf_certificate() {
    init_logger();
    let der = load_b64_file("ec_leaf.b64");
    let cert = parse::parse(&der).unwrap();
    assert_eq!(cert.version, Version::V3);
    assert!(cert.extensions.subject_alt_name.is_some());
}

#[test]
fn parses_v1_certificate_without_extensions() {
    init_logger();
    let der = load_b64_file("v1_selfsigned.b64");
    let cert = parse::parse(&der).unwrap();
    assert_eq!(cert.version, Version::V1);
    assert!(cert.extensions.basic_constraints.is_none());
}

#[test]
fn rejects_corrupted_certificate() {
    init_logger();
    let mut der = load_b64_file("leaf_cert.b64");
    der[4] ^= 0xff; // corrupt the tbsCertificate SEQUENCE tag
    assert!(parse::parse(&der).is_err());
}

#[test]
fn rejects_truncated_certificate() {
    init_logger();
    let der = load_b64_file("leaf_cert.b64");
    let truncated = &der[..der.len() - 10];
    assert!(parse::parse(truncated).is_err());
}
