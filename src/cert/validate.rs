//! X.509 Certificate validation.
//!
//! See [RFC5280 6](https://www.rfc-editor.org/rfc/rfc5280.html#section-6).
//! This crate validates a single certificate against its immediate issuer;
//! chain building and trust-anchor management are left to the caller.

mod validation_error;

pub use self::validation_error::ValidationError;
pub use self::validation_error::ValidationErrorKind;

use super::extensions::key_usage::KeyUsage;
use super::parse::CertificateView;
use crate::crypto::CryptoProvider;
use crate::oid::signature_algorithm;

/// Validate `child` against its issuer `issuer`.
///
/// `at_epoch_seconds` is the instant, in seconds since the UNIX epoch, the
/// certificate's validity window is checked against. `crypto_provider`
/// supplies the hash and signature-verification primitives this crate
/// treats as external collaborators.
pub fn validate(
    child: &CertificateView<'_>,
    issuer: &CertificateView<'_>,
    at_epoch_seconds: i64,
    crypto_provider: &impl CryptoProvider,
) -> Result<(), ValidationError> {
    if child.issuer.raw != issuer.subject.raw {
        log::warn!("issuer Name does not match issuer certificate's subject Name");
        return Err(ValidationErrorKind::IssuerMismatch.error());
    }
    log::debug!("issuer Name matches issuer certificate's subject Name");

    if let Some(basic_constraints) = issuer.extensions.basic_constraints {
        if !basic_constraints.is_ca() {
            log::warn!("issuer certificate's BasicConstraints.cA is false");
            return Err(ValidationErrorKind::IssuerNotCA.error());
        }
    }
    if let Some(key_usage) = issuer.extensions.key_usage {
        if !key_usage.is_set(KeyUsage::KeyCertSign) {
            log::warn!("issuer certificate's KeyUsage lacks keyCertSign");
            return Err(ValidationErrorKind::IssuerCannotSign.error());
        }
    }
    log::debug!("issuer certificate is permitted to sign certificates");

    if at_epoch_seconds > child.validity.not_after {
        log::warn!("certificate expired at {}", child.validity.not_after);
        return Err(ValidationErrorKind::CertExpired.error());
    }
    if at_epoch_seconds < child.validity.not_before {
        log::warn!("certificate not yet valid until {}", child.validity.not_before);
        return Err(ValidationErrorKind::CertNotYetValid.error());
    }
    log::debug!("certificate is within its validity window");

    if child.signature_algorithm_oid != child.tbs_signature_algorithm_oid {
        log::warn!(
            "outer signatureAlgorithm {} does not match tbsCertificate.signature {}",
            crate::oid::as_string(child.signature_algorithm_oid),
            crate::oid::as_string(child.tbs_signature_algorithm_oid)
        );
        return Err(ValidationErrorKind::AlgorithmMismatch.error());
    }
    if !is_known_signature_algorithm(child.signature_algorithm_oid) {
        log::warn!(
            "unsupported signature algorithm {}",
            crate::oid::as_string(child.signature_algorithm_oid)
        );
        return Err(ValidationErrorKind::UnsupportedAlgorithm.error());
    }
    log::debug!(
        "resolved signature algorithm {}",
        crate::oid::as_string(child.signature_algorithm_oid)
    );

    let oid_str = crate::oid::as_string(child.signature_algorithm_oid);
    let verified = crypto_provider
        .verify(
            &oid_str,
            issuer.subject_public_key_info.raw,
            child.tbs_certificate,
            child.signature_value,
        )
        .map_err(|e| ValidationErrorKind::BadSignature.error_with_msg(&e.to_string()))?;
    if !verified {
        log::warn!("signature verification against issuer's public key failed");
        return Err(ValidationErrorKind::BadSignature.error());
    }
    log::debug!("signature verified against issuer's public key");
    Ok(())
}

fn is_known_signature_algorithm(oid: &[u8]) -> bool {
    const KNOWN: &[&[u8]] = &[
        signature_algorithm::SHA1_WITH_RSA,
        signature_algorithm::SHA256_WITH_RSA,
        signature_algorithm::SHA384_WITH_RSA,
        signature_algorithm::SHA512_WITH_RSA,
        signature_algorithm::DSA_WITH_SHA1,
        signature_algorithm::DSA_WITH_SHA224,
        signature_algorithm::DSA_WITH_SHA256,
        signature_algorithm::ECDSA_WITH_SHA1,
        signature_algorithm::ECDSA_WITH_SHA256,
        signature_algorithm::ECDSA_WITH_SHA384,
        signature_algorithm::ECDSA_WITH_SHA512,
    ];
    KNOWN.contains(&oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_signature_algorithm_is_rejected_before_crypto_provider_is_called() {
        assert!(!is_known_signature_algorithm(&[0x2a, 0x03, 0x04]));
    }
}
