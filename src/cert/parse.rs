//! X.509 Certificate parser.

/* From https://www.rfc-editor.org/rfc/rfc5280

Certificate  ::=  SEQUENCE  {
    tbsCertificate       TBSCertificate,
    signatureAlgorithm   AlgorithmIdentifier,
    signature            BIT STRING  }


TBSCertificate  ::=  SEQUENCE  {
    version         [0]  Version DEFAULT v1,
    serialNumber         CertificateSerialNumber,
    signature            AlgorithmIdentifier,
    issuer               Name,
    validity             Validity,
    subject              Name,
    subjectPublicKeyInfo SubjectPublicKeyInfo,
    issuerUniqueID  [1]  IMPLICIT UniqueIdentifier OPTIONAL,
                         -- If present, version MUST be v2 or v3
    subjectUniqueID [2]  IMPLICIT UniqueIdentifier OPTIONAL,
                         -- If present, version MUST be v2 or v3
    extensions      [3]  Extensions OPTIONAL
                         -- If present, version MUST be v3 --  }
*/

pub mod parsing_error;

pub use self::parsing_error::ParsingError;
pub use self::parsing_error::ParsingErrorKind;

use super::extensions::{parse_extensions, Extensions};
use super::types::distinguished_name::{parse_name, Name};
use super::types::serial_number::SerialNumber;
use super::types::spki::{parse_spki, Spki};
use super::types::validity::{parse_validity, Validity};
use crate::der::reader::{tag, Class};
use crate::der::{decode_integer, peek_tag, read_tlv, read_tlv_expect, Integer};

/// The certificate version, decoded from `tbsCertificate.version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V2,
    V3,
}

/// A fully parsed X.509v3 certificate: every field is a borrowed view into
/// the buffer `parse` was called with.
#[derive(Debug, Clone, Copy)]
pub struct CertificateView<'a> {
    /// The complete `tbsCertificate` TLV, header included — the signed region.
    pub tbs_certificate: &'a [u8],
    pub version: Version,
    pub serial_number: SerialNumber<'a>,
    /// The inner `tbsCertificate.signature` AlgorithmIdentifier OID.
    pub tbs_signature_algorithm_oid: &'a [u8],
    pub issuer: Name<'a>,
    pub validity: Validity,
    pub subject: Name<'a>,
    pub subject_public_key_info: Spki<'a>,
    pub extensions: Extensions<'a>,
    /// The outer `signatureAlgorithm` OID (RFC 5280 requires this to match
    /// [Self::tbs_signature_algorithm_oid]; [crate::cert::validate] checks it).
    pub signature_algorithm_oid: &'a [u8],
    /// The raw BIT STRING content octets of `signatureValue`.
    pub signature_value: &'a [u8],
    /// The complete certificate, header included, as handed to `parse`.
    pub fingerprint_input: &'a [u8],
}

/// Parse a DER-encoded `Certificate ::= SEQUENCE { tbsCertificate, signatureAlgorithm, signature }`.
pub fn parse(encoded_certificate: &[u8]) -> Result<CertificateView<'_>, ParsingError> {
    log::trace!(
        "parsing certificate, fingerprint {}",
        crate::fingerprint_data(encoded_certificate)
    );
    let (certificate, rest) =
        read_tlv_expect(encoded_certificate, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(
            ParsingErrorKind::TrailingData.error_with_msg("trailing data after Certificate SEQUENCE")
        );
    }

    let (tbs_tlv, after_tbs) =
        read_tlv_expect(certificate.content, Class::Universal, tag::SEQUENCE)?;
    let tbs_certificate = tbs_tlv.whole;

    let (sig_alg_tlv, after_sig_alg) =
        read_tlv_expect(after_tbs, Class::Universal, tag::SEQUENCE)?;
    let signature_algorithm_oid = parse_algorithm_oid(sig_alg_tlv.content)?;

    let (sig_tlv, trailing) = read_tlv_expect(after_sig_alg, Class::Universal, tag::BIT_STRING)?;
    if !trailing.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("Certificate has more than tbsCertificate, signatureAlgorithm and signature"));
    }
    let signature_value = crate::der::decode_bit_string(sig_tlv.content)?.octets;

    let (version, after_version) = parse_version(tbs_tlv.content)?;
    let (serial_tlv, after_serial) =
        read_tlv_expect(after_version, Class::Universal, tag::INTEGER)?;
    decode_integer(serial_tlv.content)?;
    let serial_number = SerialNumber::new(serial_tlv.content);

    let (tbs_sig_alg_tlv, after_tbs_sig_alg) =
        read_tlv_expect(after_serial, Class::Universal, tag::SEQUENCE)?;
    let tbs_signature_algorithm_oid = parse_algorithm_oid(tbs_sig_alg_tlv.content)?;

    let (issuer, after_issuer) = parse_name(after_tbs_sig_alg)?;
    let (validity, after_validity) = parse_validity(after_issuer)?;
    let (subject, after_subject) = parse_name(after_validity)?;
    let (subject_public_key_info, after_spki) = parse_spki(after_subject)?;

    let mut remaining = after_spki;
    // issuerUniqueID [1], subjectUniqueID [2]: accepted and skipped.
    for implicit_tag in [1u32, 2u32] {
        if let Some((Class::ContextSpecific, t, _)) = peek_tag(remaining) {
            if t == implicit_tag {
                let (_, after) = read_tlv(remaining)?;
                remaining = after;
            }
        }
    }

    let mut extensions = Extensions::default();
    if let Some((Class::ContextSpecific, 3, true)) = peek_tag(remaining) {
        let (explicit, after) = read_tlv_expect(remaining, Class::ContextSpecific, 3)?;
        if version != Version::V3 {
            return Err(ParsingErrorKind::InvalidVersion
                .error_with_msg("extensions present but version is not v3"));
        }
        extensions = parse_extensions(explicit.content)?;
        remaining = after;
    }
    if !remaining.is_empty() {
        return Err(
            ParsingErrorKind::TrailingData.error_with_msg("trailing data inside tbsCertificate")
        );
    }

    log::debug!(
        "parsed certificate: version {:?}, {} extension(s)",
        version,
        seen_extension_count(&extensions)
    );

    Ok(CertificateView {
        tbs_certificate,
        version,
        serial_number,
        tbs_signature_algorithm_oid,
        issuer,
        validity,
        subject,
        subject_public_key_info,
        extensions,
        signature_algorithm_oid,
        signature_value,
        fingerprint_input: encoded_certificate,
    })
}

fn seen_extension_count(extensions: &Extensions<'_>) -> usize {
    [
        extensions.basic_constraints.is_some(),
        extensions.key_usage.is_some(),
        extensions.extended_key_usage.is_some(),
        extensions.subject_alt_name.is_some(),
        extensions.issuer_alt_name.is_some(),
        extensions.subject_key_identifier.is_some(),
        extensions.authority_key_identifier.is_some(),
        extensions.netscape_cert_type.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

fn parse_version(tbs_content: &[u8]) -> Result<(Version, &[u8]), ParsingError> {
    if let Some((Class::ContextSpecific, 0, true)) = peek_tag(tbs_content) {
        let (explicit, rest) = read_tlv_expect(tbs_content, Class::ContextSpecific, 0)?;
        let (int_tlv, inner_rest) =
            read_tlv_expect(explicit.content, Class::Universal, tag::INTEGER)?;
        if !inner_rest.is_empty() {
            return Err(
                ParsingErrorKind::TrailingData.error_with_msg("version has trailing data")
            );
        }
        let version = match decode_integer(int_tlv.content)? {
            Integer::Small(0) => Version::V1,
            Integer::Small(1) => Version::V2,
            Integer::Small(2) => Version::V3,
            _ => return Err(ParsingErrorKind::InvalidVersion.error_with_msg("version must be 0, 1 or 2")),
        };
        Ok((version, rest))
    } else {
        Ok((Version::V1, tbs_content))
    }
}

/// Read an `AlgorithmIdentifier ::= SEQUENCE { algorithm OBJECT IDENTIFIER, parameters ANY OPTIONAL }`
/// and return just its OID; parameters are tolerated but not inspected.
fn parse_algorithm_oid(content: &[u8]) -> Result<&[u8], ParsingError> {
    let (oid_tlv, _rest) = read_tlv_expect(content, Class::Universal, tag::OBJECT_IDENTIFIER)?;
    Ok(crate::der::decode_object_identifier(oid_tlv.content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_trailing_data_after_certificate() {
        let der = [0x30, 0x02, 0x30, 0x00, 0xff];
        assert!(parse(&der).is_err());
    }
}
