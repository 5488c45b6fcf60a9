//! X.509 certificate parsing errors.

use std::error::Error;
use std::fmt;

use crate::der::DerError;

/// Cause of a certificate parsing error.
#[derive(Debug)]
pub enum ParsingErrorKind {
    /// A TLV header ran past the end of the input.
    TruncatedInput,
    /// A tag did not match what the grammar at this position requires.
    UnexpectedTag,
    /// A length encoding violated DER's definite-length rules.
    InvalidLength,
    /// A SEQUENCE or SET carried more elements than its grammar allows.
    TrailingData,
    /// `version` decoded to something other than v1, v2 or v3.
    InvalidVersion,
    /// An INTEGER was not minimally encoded.
    NonMinimalInteger,
    /// A BOOLEAN was neither 0x00 nor 0xFF.
    BadBooleanEncoding,
    /// A BIT STRING's unused-bit count or padding bits were invalid.
    BadBitStringPadding,
    /// A character string's content did not match its claimed encoding.
    UnsupportedStringEncoding,
    /// A UTCTime/GeneralizedTime value did not follow the DER time profile.
    UnsupportedTimeFormat,
    /// The same extension OID appeared more than once.
    DuplicateExtension,
    /// A critical extension this crate does not recognize was present.
    UnknownCriticalExtension,
    /// More GeneralName entries were present than the caller's compile-time
    /// cap allows.
    TooManySubjectAltNames,
    /// A SubjectPublicKeyInfo or signature algorithm OID is not one this
    /// crate can decode.
    UnsupportedAlgorithm,
}

impl ParsingErrorKind {
    /// Create a new instance with an error message.
    pub fn error_with_msg(self, msg: &str) -> ParsingError {
        ParsingError {
            kind: self,
            msg: Some(msg.to_string()),
        }
    }

    /// Create a new instance without an error message.
    pub fn error(self) -> ParsingError {
        ParsingError {
            kind: self,
            msg: None,
        }
    }
}

impl fmt::Display for ParsingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/** Certificate parsing error.

Create a new instance via [ParsingErrorKind]. */
#[derive(Debug)]
pub struct ParsingError {
    kind: ParsingErrorKind,
    msg: Option<String>,
}

impl ParsingError {
    /// Return the [ParsingErrorKind] of this error.
    pub fn kind(&self) -> &ParsingErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(msg) = &self.msg {
            write!(f, "{} {}", self.kind, msg)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Error for ParsingError {}

impl From<DerError> for ParsingError {
    fn from(e: DerError) -> Self {
        let kind = match e.kind() {
            crate::der::DerErrorKind::TruncatedInput => ParsingErrorKind::TruncatedInput,
            crate::der::DerErrorKind::UnexpectedTag => ParsingErrorKind::UnexpectedTag,
            crate::der::DerErrorKind::InvalidLength => ParsingErrorKind::InvalidLength,
            crate::der::DerErrorKind::TrailingData => ParsingErrorKind::TrailingData,
            crate::der::DerErrorKind::InvalidVersion => ParsingErrorKind::InvalidVersion,
            crate::der::DerErrorKind::NonMinimalInteger => ParsingErrorKind::NonMinimalInteger,
            crate::der::DerErrorKind::BadBooleanEncoding => ParsingErrorKind::BadBooleanEncoding,
            crate::der::DerErrorKind::BadBitStringPadding => ParsingErrorKind::BadBitStringPadding,
            crate::der::DerErrorKind::UnsupportedStringEncoding => {
                ParsingErrorKind::UnsupportedStringEncoding
            }
            crate::der::DerErrorKind::UnsupportedTimeFormat => {
                ParsingErrorKind::UnsupportedTimeFormat
            }
        };
        match e.message() {
            Some(msg) => kind.error_with_msg(msg),
            None => kind.error(),
        }
    }
}
