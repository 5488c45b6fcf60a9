//! X.509 Certificate extensions.

pub mod alternative_name;
pub mod basic_constraints;
pub mod extended_key_usage;
pub mod key_identifier;
pub mod key_usage;
pub mod netscape_cert_type;

pub use self::alternative_name::{parse_alternative_name, MAX_NAMES};
pub use self::basic_constraints::{parse_basic_constraints, BasicConstraints};
pub use self::extended_key_usage::{
    parse_extended_key_usage, ExtendedKeyUsage, ExtendedKeyUsagePurpose,
};
pub use self::key_identifier::{
    parse_authority_key_identifier, parse_subject_key_identifier, AuthorityKeyIdentifier,
    SubjectKeyIdentifier,
};
pub use self::key_usage::{parse_key_usage, KeyUsage, KeyUsageFlags};
pub use self::netscape_cert_type::{parse_netscape_cert_type, NetscapeCertType};

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::cert::types::general_name::GeneralNameList;
use crate::der::reader::{tag, Class};
use crate::der::{decode_boolean, read_tlv, read_tlv_expect};

/// The decoded X.509v3 extension block. Unknown non-critical extensions are
/// silently dropped once recognized as unknown; unknown *critical*
/// extensions fail the whole parse, per RFC 5280 4.2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extensions<'a> {
    pub basic_constraints: Option<BasicConstraints>,
    pub key_usage: Option<KeyUsageFlags>,
    pub extended_key_usage: Option<[Option<ExtendedKeyUsage<'a>>; extended_key_usage::MAX_PURPOSES]>,
    pub subject_alt_name: Option<GeneralNameList<'a, MAX_NAMES>>,
    pub issuer_alt_name: Option<GeneralNameList<'a, MAX_NAMES>>,
    pub subject_key_identifier: Option<SubjectKeyIdentifier<'a>>,
    pub authority_key_identifier: Option<AuthorityKeyIdentifier<'a>>,
    pub netscape_cert_type: Option<NetscapeCertType>,
}

/// Parse `Extensions ::= SEQUENCE SIZE (1..MAX) OF Extension`, where
/// `Extension ::= SEQUENCE { extnID OBJECT IDENTIFIER, critical BOOLEAN DEFAULT FALSE, extnValue OCTET STRING }`.
///
/// An empty, present Extensions SEQUENCE is accepted as zero extensions
/// rather than rejected; RFC 5280's `SIZE (1..MAX)` constraint is advisory
/// here, not a hard parse failure, since real-world encoders occasionally
/// emit one.
pub fn parse_extensions(input: &[u8]) -> Result<Extensions<'_>, ParsingError> {
    let (sequence, rest) = read_tlv_expect(input, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(
            ParsingErrorKind::TrailingData.error_with_msg("trailing data after Extensions SEQUENCE")
        );
    }
    if sequence.content.is_empty() {
        log::debug!("Extensions SEQUENCE is present but empty; treating as zero extensions");
    }

    let mut extensions = Extensions::default();
    let mut seen_oids: Vec<&[u8]> = Vec::new();
    let mut remaining = sequence.content;
    while !remaining.is_empty() {
        let (extension, after) = read_tlv_expect(remaining, Class::Universal, tag::SEQUENCE)?;
        remaining = after;

        let (oid_tlv, after_oid) =
            read_tlv_expect(extension.content, Class::Universal, tag::OBJECT_IDENTIFIER)?;
        let oid = crate::der::decode_object_identifier(oid_tlv.content)?;

        if seen_oids.contains(&oid) {
            return Err(ParsingErrorKind::DuplicateExtension.error_with_msg(&format!(
                "extension {} appears more than once",
                crate::oid::as_string(oid)
            )));
        }
        seen_oids.push(oid);

        let mut critical = false;
        let mut after_critical = after_oid;
        if let Some((Class::Universal, tag::BOOLEAN, _)) = crate::der::peek_tag(after_oid) {
            let (tlv, after) = read_tlv_expect(after_oid, Class::Universal, tag::BOOLEAN)?;
            critical = decode_boolean(tlv.content)?;
            after_critical = after;
        }

        let (value_tlv, after_value) =
            read_tlv_expect(after_critical, Class::Universal, tag::OCTET_STRING)?;
        if !after_value.is_empty() {
            return Err(ParsingErrorKind::TrailingData
                .error_with_msg("Extension has more than extnID, critical and extnValue"));
        }
        let extn_value = value_tlv.content;

        dispatch_extension(oid, critical, extn_value, &mut extensions)?;
    }
    Ok(extensions)
}

fn dispatch_extension<'a>(
    oid: &'a [u8],
    critical: bool,
    extn_value: &'a [u8],
    extensions: &mut Extensions<'a>,
) -> Result<(), ParsingError> {
    if oid == BasicConstraints::OID {
        extensions.basic_constraints = Some(parse_basic_constraints(extn_value)?);
    } else if oid == KeyUsage::OID {
        extensions.key_usage = Some(parse_key_usage(extn_value)?);
    } else if oid == extended_key_usage::OID {
        let (purposes, len) = parse_extended_key_usage(extn_value)?;
        let mut capped = purposes;
        capped[len..].iter_mut().for_each(|slot| *slot = None);
        extensions.extended_key_usage = Some(capped);
    } else if oid == alternative_name::OID_SUBJECT_AN {
        extensions.subject_alt_name = Some(parse_alternative_name(extn_value)?);
    } else if oid == alternative_name::OID_ISSUER_AN {
        extensions.issuer_alt_name = Some(parse_alternative_name(extn_value)?);
    } else if oid == key_identifier::SKI_OID {
        extensions.subject_key_identifier = Some(parse_subject_key_identifier(extn_value)?);
    } else if oid == key_identifier::AKI_OID {
        extensions.authority_key_identifier = Some(parse_authority_key_identifier(extn_value)?);
    } else if oid == netscape_cert_type::OID {
        extensions.netscape_cert_type = Some(parse_netscape_cert_type(extn_value)?);
    } else if critical {
        return Err(ParsingErrorKind::UnknownCriticalExtension.error_with_msg(&format!(
            "unrecognized critical extension {}",
            crate::oid::as_string(oid)
        )));
    } else {
        log::trace!(
            "ignoring unrecognized non-critical extension {}",
            crate::oid::as_string(oid)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension_der(oid: &[u8], critical: Option<bool>, value: &[u8]) -> Vec<u8> {
        let mut oid_tlv = vec![0x06, oid.len() as u8];
        oid_tlv.extend_from_slice(oid);
        let mut content = oid_tlv;
        if let Some(c) = critical {
            content.extend_from_slice(&[0x01, 0x01, if c { 0xff } else { 0x00 }]);
        }
        content.extend_from_slice(&[0x04, value.len() as u8]);
        content.extend_from_slice(value);
        let mut out = vec![0x30, content.len() as u8];
        out.extend_from_slice(&content);
        out
    }

    #[test]
    fn empty_extensions_sequence_is_accepted() {
        let der = [0x30, 0x00];
        let extensions = parse_extensions(&der).unwrap();
        assert!(extensions.basic_constraints.is_none());
    }

    #[test]
    fn unknown_critical_extension_fails() {
        let ext = extension_der(&[0x55, 0x1d, 0x63], Some(true), &[0x05, 0x00]); // bogus OID, not in our table
        let mut der = vec![0x30, ext.len() as u8];
        der.extend_from_slice(&ext);
        assert!(parse_extensions(&der).is_err());
    }

    #[test]
    fn unknown_noncritical_extension_is_ignored() {
        let ext = extension_der(&[0x55, 0x1d, 0x63], Some(false), &[0x05, 0x00]);
        let mut der = vec![0x30, ext.len() as u8];
        der.extend_from_slice(&ext);
        let extensions = parse_extensions(&der).unwrap();
        assert!(extensions.basic_constraints.is_none());
    }

    #[test]
    fn duplicate_extension_oid_fails() {
        let bc = extension_der(BasicConstraints::OID, None, &[0x30, 0x00]);
        let mut content = bc.clone();
        content.extend_from_slice(&bc);
        let mut der = vec![0x30, content.len() as u8];
        der.extend_from_slice(&content);
        assert!(parse_extensions(&der).is_err());
    }

    #[test]
    fn decodes_basic_constraints() {
        let ext = extension_der(BasicConstraints::OID, Some(true), &[0x30, 0x03, 0x01, 0x01, 0xff]);
        let mut der = vec![0x30, ext.len() as u8];
        der.extend_from_slice(&ext);
        let extensions = parse_extensions(&der).unwrap();
        assert!(extensions.basic_constraints.unwrap().is_ca());
    }
}
