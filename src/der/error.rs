//! Errors produced while reading a DER TLV header or decoding a primitive value.

use std::fmt;

/// Kind of failure while reading raw DER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerErrorKind {
    /// Fewer bytes remain in the buffer than the header's reported length demands.
    TruncatedInput,
    /// The caller's expected tag did not match the tag actually read.
    UnexpectedTag,
    /// The length octets use a form DER forbids (indefinite, long-form 0xFF,
    /// or more length octets than the minimum required).
    InvalidLength,
    /// A SEQUENCE/SET's content has bytes left over after all expected
    /// fields have been consumed.
    TrailingData,
    /// `tbsCertificate.version` decoded to something other than 0, 1 or 2.
    InvalidVersion,
    /// An INTEGER's content octets are not the minimal two's-complement encoding.
    NonMinimalInteger,
    /// A BOOLEAN's content octet was neither 0x00 nor 0xFF.
    BadBooleanEncoding,
    /// A BIT STRING's unused-bit count is out of range, or its masked
    /// trailing bits are non-zero.
    BadBitStringPadding,
    /// A string primitive's tag is not one this decoder recognizes.
    UnsupportedStringEncoding,
    /// A Time primitive's content does not match the accepted UTCTime or
    /// GeneralizedTime grammar (UTC "Z" suffix, no fractional seconds).
    UnsupportedTimeFormat,
}

impl DerErrorKind {
    /// Wrap this kind into an [DerError] with no additional message.
    pub fn error(self) -> DerError {
        DerError {
            kind: self,
            msg: None,
        }
    }

    /// Wrap this kind into an [DerError] with a contextual message.
    pub fn error_with_msg(self, msg: &str) -> DerError {
        DerError {
            kind: self,
            msg: Some(msg.to_string()),
        }
    }
}

/// Error raised by the TLV reader or a primitive decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerError {
    kind: DerErrorKind,
    msg: Option<String>,
}

impl DerError {
    /// The kind of failure.
    pub fn kind(&self) -> DerErrorKind {
        self.kind
    }

    /// The contextual message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}

impl fmt::Display for DerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.msg {
            Some(msg) => write!(f, "{:?}: {msg}", self.kind),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl std::error::Error for DerError {}
