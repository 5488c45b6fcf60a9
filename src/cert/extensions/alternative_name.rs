//! X.509 Subject/Issuer Alternative Name extensions.
//!
//! See [RFC5280 4.2.1.6](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.6),
//! [RFC5280 4.2.1.7](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.7).

use crate::cert::parse::parsing_error::ParsingError;
use crate::cert::types::general_name::{parse_general_name_sequence, GeneralNameList};

/// `SubjectAltName ::= GeneralNames`, 2.5.29.17.
pub const OID_SUBJECT_AN: &[u8] = crate::oid::extension::SUBJECT_ALT_NAME;
/// `IssuerAltName ::= GeneralNames`, 2.5.29.18.
pub const OID_ISSUER_AN: &[u8] = crate::oid::extension::ISSUER_ALT_NAME;

/// The compile-time cap on the number of names this crate keeps per
/// SubjectAltName/IssuerAltName extension instance.
pub const MAX_NAMES: usize = 4;

/// Decode either extension's value octets (`GeneralNames`, a `SEQUENCE OF GeneralName`).
pub fn parse_alternative_name(content: &[u8]) -> Result<GeneralNameList<'_, MAX_NAMES>, ParsingError> {
    parse_general_name_sequence::<MAX_NAMES>(content)
}
