//! X.509 Extended Key Usage extension.
//!
//! See [RFC5280 4.2.1.12](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.12).

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::der::reader::{tag, Class};
use crate::der::{decode_object_identifier, read_tlv_expect};

/// A recognized key purpose. Purposes this crate does not have a name for
/// are still carried (see [ExtendedKeyUsage::oid]) but render as [Self::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtendedKeyUsagePurpose {
    /// `anyExtendedKeyUsage`, 2.5.29.37.0.
    Any,
    /// `id-kp-serverAuth`, 1.3.6.1.5.5.7.3.1.
    ServerAuth,
    /// `id-kp-clientAuth`, 1.3.6.1.5.5.7.3.2.
    ClientAuth,
    /// `id-kp-codeSigning`, 1.3.6.1.5.5.7.3.3.
    CodeSigning,
    /// `id-kp-emailProtection`, 1.3.6.1.5.5.7.3.4.
    EmailProtection,
    /// `id-kp-timeStamping`, 1.3.6.1.5.5.7.3.8.
    TimeStamping,
    /// `id-kp-OCSPSigning`, 1.3.6.1.5.5.7.3.9.
    OcspSigning,
    /// A key purpose OID this crate does not assign a name to.
    Other,
}

const ANY_EXTENDED_KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x25, 0x00];
const SERVER_AUTH: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x01];
const CLIENT_AUTH: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x02];
const CODE_SIGNING: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x03];
const EMAIL_PROTECTION: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x04];
const TIME_STAMPING: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x08];
const OCSP_SIGNING: &[u8] = &[0x2b, 0x06, 0x01, 0x05, 0x05, 0x07, 0x03, 0x09];

fn purpose_for_oid(oid: &[u8]) -> ExtendedKeyUsagePurpose {
    match oid {
        ANY_EXTENDED_KEY_USAGE => ExtendedKeyUsagePurpose::Any,
        SERVER_AUTH => ExtendedKeyUsagePurpose::ServerAuth,
        CLIENT_AUTH => ExtendedKeyUsagePurpose::ClientAuth,
        CODE_SIGNING => ExtendedKeyUsagePurpose::CodeSigning,
        EMAIL_PROTECTION => ExtendedKeyUsagePurpose::EmailProtection,
        TIME_STAMPING => ExtendedKeyUsagePurpose::TimeStamping,
        OCSP_SIGNING => ExtendedKeyUsagePurpose::OcspSigning,
        _ => ExtendedKeyUsagePurpose::Other,
    }
}

/// One entry of an `ExtKeyUsageSyntax ::= SEQUENCE OF KeyPurposeId`.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedKeyUsage<'a> {
    /// The recognized purpose, or [ExtendedKeyUsagePurpose::Other].
    pub purpose: ExtendedKeyUsagePurpose,
    /// The DER content octets of the KeyPurposeId OID.
    pub oid: &'a [u8],
}

// joint-iso-ccitt(2) ds(5) id-ce(29) id-ce-extKeyUsage(37)
/// Extended Key Usage object identifier, DER content octets.
pub const OID: &[u8] = crate::oid::extension::EXTENDED_KEY_USAGE;

/// Fixed capacity for the purpose list, matching this crate's
/// no-heap-allocation decode path.
pub const MAX_PURPOSES: usize = 8;

/// Decode the extension value octets (the `ExtKeyUsageSyntax` SEQUENCE).
pub fn parse_extended_key_usage(
    content: &[u8],
) -> Result<([Option<ExtendedKeyUsage<'_>>; MAX_PURPOSES], usize), ParsingError> {
    let (sequence, rest) = read_tlv_expect(content, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("trailing data after ExtKeyUsageSyntax SEQUENCE"));
    }
    let mut out = [None; MAX_PURPOSES];
    let mut len = 0;
    let mut remaining = sequence.content;
    while !remaining.is_empty() {
        if len >= MAX_PURPOSES {
            return Err(ParsingErrorKind::TrailingData
                .error_with_msg("more key purposes than this crate's fixed capacity"));
        }
        let (tlv, after) = read_tlv_expect(remaining, Class::Universal, tag::OBJECT_IDENTIFIER)?;
        let oid = decode_object_identifier(tlv.content)?;
        out[len] = Some(ExtendedKeyUsage {
            purpose: purpose_for_oid(oid),
            oid,
        });
        len += 1;
        remaining = after;
    }
    Ok((out, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid_der(bytes: &[u8]) -> Vec<u8> {
        let mut out = vec![0x06, bytes.len() as u8];
        out.extend_from_slice(bytes);
        out
    }

    #[test]
    fn recognizes_server_and_client_auth() {
        let mut content = oid_der(SERVER_AUTH);
        content.extend_from_slice(&oid_der(CLIENT_AUTH));
        let mut der = vec![0x30, content.len() as u8];
        der.extend_from_slice(&content);

        let (purposes, len) = parse_extended_key_usage(&der).unwrap();
        assert_eq!(len, 2);
        assert_eq!(purposes[0].unwrap().purpose, ExtendedKeyUsagePurpose::ServerAuth);
        assert_eq!(purposes[1].unwrap().purpose, ExtendedKeyUsagePurpose::ClientAuth);
    }

    #[test]
    fn unrecognized_oid_is_other() {
        let content = oid_der(&[0x2b, 0x06, 0x01, 0x04, 0x01, 0x82, 0x37, 0x14, 0x02]); // MS OID, not in table
        let mut der = vec![0x30, content.len() as u8];
        der.extend_from_slice(&content);
        let (purposes, len) = parse_extended_key_usage(&der).unwrap();
        assert_eq!(len, 1);
        assert_eq!(purposes[0].unwrap().purpose, ExtendedKeyUsagePurpose::Other);
    }
}
