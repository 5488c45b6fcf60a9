//! X.509 Basic Constraints extension.
//!
//! See [RFC5280 4.2.1.9](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.9).

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::der::reader::{tag, Class};
use crate::der::{decode_boolean, decode_integer, peek_tag, read_tlv_expect, Integer};

/// `BasicConstraints ::= SEQUENCE { cA BOOLEAN DEFAULT FALSE, pathLenConstraint INTEGER OPTIONAL }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicConstraints {
    ca: bool,
    path_len: Option<u64>,
}

impl BasicConstraints {
    // joint-iso-ccitt(2) ds(5) ce(29) basicConstraints(19)
    /// Basic Constraints object identifier, DER content octets.
    pub const OID: &'static [u8] = crate::oid::extension::BASIC_CONSTRAINTS;

    /// Return `true` if this belongs to a CA certificate.
    pub fn is_ca(&self) -> bool {
        self.ca
    }

    /// Return the number of subordinate CA levels this CA permits below it,
    /// if constrained. Always `None` for a non-CA certificate.
    pub fn path_len(&self) -> Option<u64> {
        if self.ca {
            self.path_len
        } else {
            None
        }
    }
}

/// Decode the extension value octets (the BasicConstraints SEQUENCE).
pub fn parse_basic_constraints(content: &[u8]) -> Result<BasicConstraints, ParsingError> {
    let (sequence, rest) = read_tlv_expect(content, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("trailing data after BasicConstraints SEQUENCE"));
    }
    let mut remaining = sequence.content;
    let mut ca = false;
    if let Some((Class::Universal, tag::BOOLEAN, _)) = peek_tag(remaining) {
        let (tlv, after) = read_tlv_expect(remaining, Class::Universal, tag::BOOLEAN)?;
        ca = decode_boolean(tlv.content)?;
        remaining = after;
    }
    let mut path_len = None;
    if let Some((Class::Universal, tag::INTEGER, _)) = peek_tag(remaining) {
        let (tlv, after) = read_tlv_expect(remaining, Class::Universal, tag::INTEGER)?;
        path_len = Some(match decode_integer(tlv.content)? {
            Integer::Small(n) if n >= 0 => n as u64,
            _ => {
                return Err(ParsingErrorKind::InvalidLength
                    .error_with_msg("pathLenConstraint out of supported range"))
            }
        });
        remaining = after;
    }
    if !remaining.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("BasicConstraints has more than cA and pathLenConstraint"));
    }
    Ok(BasicConstraints { ca, path_len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_not_ca_with_no_content() {
        let der = [0x30, 0x00];
        let bc = parse_basic_constraints(&der).unwrap();
        assert!(!bc.is_ca());
        assert_eq!(bc.path_len(), None);
    }

    #[test]
    fn decodes_ca_with_path_len() {
        let der = [0x30, 0x06, 0x01, 0x01, 0xff, 0x02, 0x01, 0x02];
        let bc = parse_basic_constraints(&der).unwrap();
        assert!(bc.is_ca());
        assert_eq!(bc.path_len(), Some(2));
    }
}
