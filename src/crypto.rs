//! The collaborator boundary toward cryptographic primitives.
//!
//! Hashing, bignum arithmetic and signature verification are explicitly out
//! of scope for this crate (see the purpose/scope notes in the crate docs):
//! [CryptoProvider] is the seam a caller plugs a real provider into. A
//! default implementation backed by `tyst` is provided so the crate is
//! usable out of the box, but nothing in [crate::cert] depends on `tyst`
//! directly — only on this trait.

use std::fmt;

/// Error returned by a [CryptoProvider] operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoError {
    msg: String,
}

impl CryptoError {
    /// Build a new error with a human-readable message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for CryptoError {}

/// The hashing and signature-verification primitives the validator needs.
///
/// Implementations are keyed by OID rather than by a closed enum of
/// algorithms, matching how the certificate itself identifies both digest
/// and signature algorithms.
pub trait CryptoProvider {
    /// Compute a one-shot digest of `data` under the digest algorithm named
    /// by `digest_oid` (dotted-decimal, e.g. `"2.16.840.1.101.3.4.2.1"` for
    /// SHA-256).
    fn hash(&self, digest_oid: &str, data: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verify `signature` over `message` against the public key encoded in
    /// `issuer_spki_der` (the issuer's raw, DER-encoded SubjectPublicKeyInfo),
    /// using the signature scheme named by `signature_algorithm_oid`
    /// (dotted-decimal, e.g. `"1.2.840.113549.1.1.11"` for
    /// sha256WithRSAEncryption).
    ///
    /// `message` is the raw tbsCertificate region; providers that bundle
    /// digest computation into their signature scheme (as most do) hash it
    /// internally rather than requiring a pre-hashed digest.
    fn verify(
        &self,
        signature_algorithm_oid: &str,
        issuer_spki_der: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;
}

/// Default [CryptoProvider] backed by the `tyst` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TystCryptoProvider;

impl CryptoProvider for TystCryptoProvider {
    fn hash(&self, digest_oid: &str, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let name = digest_name_for_oid(digest_oid)
            .ok_or_else(|| CryptoError::new(format!("unrecognized digest OID {digest_oid}")))?;
        let digest = tyst::Tyst::instance()
            .digests()
            .by_name(name)
            .ok_or_else(|| CryptoError::new(format!("tyst has no digest named {name}")))?;
        Ok(digest.hash(data))
    }

    fn verify(
        &self,
        signature_algorithm_oid: &str,
        issuer_spki_der: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        use tyst::traits::se::ToPublicKey;
        let public_key = issuer_spki_der.to_public_key();
        let mut se = tyst::Tyst::instance()
            .ses()
            .by_oid(signature_algorithm_oid)
            .ok_or_else(|| {
                CryptoError::new(format!(
                    "tyst has no signature scheme for OID {signature_algorithm_oid}"
                ))
            })?;
        Ok(se.verify(public_key.as_ref(), signature, message))
    }
}

/// Map a handful of well-known digest OIDs to the names `tyst`'s digest
/// registry uses. Only the digests the signature-algorithm table in
/// [crate::cert::validate] can resolve to are listed here.
fn digest_name_for_oid(oid: &str) -> Option<&'static str> {
    match oid {
        "1.3.14.3.2.26" => Some("SHA-1"),
        "2.16.840.1.101.3.4.2.1" => Some("SHA-256"),
        "2.16.840.1.101.3.4.2.2" => Some("SHA-384"),
        "2.16.840.1.101.3.4.2.3" => Some("SHA-512"),
        "2.16.840.1.101.3.4.2.4" => Some("SHA-224"),
        _ => None,
    }
}
