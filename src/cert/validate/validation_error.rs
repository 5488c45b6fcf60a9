//! X.509 Certificate validation errors.

use std::error::Error;
use std::fmt;

/// Cause of certificate validation error.
#[derive(Debug)]
pub enum ValidationErrorKind {
    /// The certificate's issuer Name does not byte-for-byte match the
    /// issuer certificate's subject Name.
    IssuerMismatch,
    /// The issuer certificate's BasicConstraints extension is present and
    /// `cA` is false.
    IssuerNotCA,
    /// The issuer certificate's KeyUsage extension is present and
    /// `keyCertSign` is not set.
    IssuerCannotSign,
    /// The current instant is after `validity.notAfter`.
    CertExpired,
    /// The current instant is before `validity.notBefore`.
    CertNotYetValid,
    /// The outer `signatureAlgorithm` OID does not match the inner
    /// `tbsCertificate.signature` OID.
    AlgorithmMismatch,
    /// The signature algorithm OID does not resolve to a hash/signature
    /// family this crate (or its [crate::crypto::CryptoProvider]) knows.
    UnsupportedAlgorithm,
    /// Signature verification against the issuer's public key failed.
    BadSignature,
}

impl ValidationErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg(self, msg: &str) -> ValidationError {
        ValidationError {
            kind: self,
            msg: Some(msg.to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> ValidationError {
        ValidationError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/** Certificate validation error.

Create a new instance via [ValidationErrorKind]. */
#[derive(Debug)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    msg: Option<String>,
}

impl ValidationError {
    /// Return the [ValidationErrorKind] of this error.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{} {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Error for ValidationError {}
