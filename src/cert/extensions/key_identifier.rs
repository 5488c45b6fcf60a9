//! X.509 AuthorityKeyIdentifier and SubjectKeyIdentifier extensions.
//!
//! See [RFC5280 4.2.1.1](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.1),
//! [RFC5280 4.2.1.2](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.2).

use crate::cert::parse::parsing_error::ParsingError;
use crate::der::reader::{tag, Class};
use crate::der::read_tlv_expect;

/// Authority Key Identifier, `keyIdentifier` field only — this crate does
/// not use `authorityCertIssuer`/`authorityCertSerialNumber` for path
/// building.
#[derive(Debug, Clone, Copy)]
pub struct AuthorityKeyIdentifier<'a> {
    /// The raw `keyIdentifier` OCTET STRING content, if present.
    pub key_identifier: Option<&'a [u8]>,
}

// joint-iso-ccitt(2) ds(5) ce(29) authorityKeyIdentifier(35)
/// Authority Key Identifier object identifier, DER content octets.
pub const AKI_OID: &[u8] = crate::oid::extension::AUTHORITY_KEY_IDENTIFIER;

/// `SubjectKeyIdentifier ::= KeyIdentifier` (an OCTET STRING).
pub type SubjectKeyIdentifier<'a> = &'a [u8];

// joint-iso-ccitt(2) ds(5) ce(29) subjectKeyIdentifier(14)
/// Subject Key Identifier object identifier, DER content octets.
pub const SKI_OID: &[u8] = crate::oid::extension::SUBJECT_KEY_IDENTIFIER;

/// Decode `AuthorityKeyIdentifier ::= SEQUENCE { keyIdentifier [0] IMPLICIT KeyIdentifier OPTIONAL, ... }`,
/// reading only the `[0]`-tagged keyIdentifier and skipping any other fields present.
pub fn parse_authority_key_identifier(
    content: &[u8],
) -> Result<AuthorityKeyIdentifier<'_>, ParsingError> {
    let (sequence, _rest) = read_tlv_expect(content, Class::Universal, tag::SEQUENCE)?;
    let mut key_identifier = None;
    let mut remaining = sequence.content;
    while !remaining.is_empty() {
        let (tlv, after) = crate::der::read_tlv(remaining)?;
        if tlv.class == Class::ContextSpecific && tlv.tag == 0 {
            key_identifier = Some(tlv.content);
        }
        remaining = after;
    }
    Ok(AuthorityKeyIdentifier { key_identifier })
}

/// Decode `SubjectKeyIdentifier ::= KeyIdentifier`, the extension value's
/// OCTET STRING content.
pub fn parse_subject_key_identifier(content: &[u8]) -> Result<SubjectKeyIdentifier<'_>, ParsingError> {
    let (tlv, rest) = read_tlv_expect(content, Class::Universal, tag::OCTET_STRING)?;
    if !rest.is_empty() {
        return Err(crate::cert::parse::parsing_error::ParsingErrorKind::TrailingData
            .error_with_msg("trailing data after SubjectKeyIdentifier OCTET STRING"));
    }
    Ok(tlv.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_authority_key_identifier() {
        let kid = [0x80, 0x04, 0xde, 0xad, 0xbe, 0xef];
        let der = {
            let mut out = vec![0x30, kid.len() as u8];
            out.extend_from_slice(&kid);
            out
        };
        let aki = parse_authority_key_identifier(&der).unwrap();
        assert_eq!(aki.key_identifier, Some([0xde, 0xad, 0xbe, 0xef].as_slice()));
    }

    #[test]
    fn decodes_subject_key_identifier() {
        let der = [0x04, 0x02, 0xca, 0xfe];
        let ski = parse_subject_key_identifier(&der).unwrap();
        assert_eq!(ski, &[0xca, 0xfe]);
    }
}
