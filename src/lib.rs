#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Decoding and validation of DER-encoded X.509 v3 certificates.
//!
//! [cert::parse] turns a DER byte slice into a borrowed [cert::CertificateView]
//! without allocating or copying; [cert::validate::validate] checks one
//! certificate against its immediate issuer. Cryptographic primitives are
//! not bundled in — see [crypto::CryptoProvider].
//!
//! Chain discovery, trust-anchor management, revocation checking and PEM
//! handling are out of scope; callers are expected to supply a DER buffer
//! and an issuer of their choosing.

pub mod cert;
pub mod crypto;
pub mod der;
pub mod oid;
pub mod puny_code;

use tyst::{encdec::hex::ToHex, Tyst};

/// Create a lower case hex encoded SHA3-512 fingerprint of the `data`.
pub fn fingerprint_data(data: &[u8]) -> String {
    Tyst::instance()
        .digests()
        .by_name("SHA3-512")
        .unwrap()
        .hash(data)
        .to_hex()
}

#[cfg(test)]
pub mod test_utils {
    //! Common testing utilities.

    /// Initialize `env_logger` for testing purposes.
    pub fn init_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }
}
