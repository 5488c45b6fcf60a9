//! OBJECT IDENTIFIER constants and display utilities.
//!
//! Every constant here is the *DER content octets* of the OID (what
//! [crate::der::decode_object_identifier] hands back), not a decimal arc
//! array — comparisons against these tables are plain byte-slice equality.
//! Arc decoding into a dotted-decimal string is provided separately for
//! logging and `Display` impls; it is never used to recognize a known OID.

/// Attribute type OIDs under joint-iso-itu-t(2).ds(5).attributeType(4), used
/// to recognize RDN attributes in a Name.
pub mod attribute {
    pub const COMMON_NAME: &[u8] = &[0x55, 0x04, 0x03];
    pub const SURNAME: &[u8] = &[0x55, 0x04, 0x04];
    pub const SERIAL_NUMBER: &[u8] = &[0x55, 0x04, 0x05];
    pub const COUNTRY_NAME: &[u8] = &[0x55, 0x04, 0x06];
    pub const LOCALITY_NAME: &[u8] = &[0x55, 0x04, 0x07];
    pub const STATE_OR_PROVINCE_NAME: &[u8] = &[0x55, 0x04, 0x08];
    pub const ORGANIZATION_NAME: &[u8] = &[0x55, 0x04, 0x0a];
    pub const ORGANIZATIONAL_UNIT_NAME: &[u8] = &[0x55, 0x04, 0x0b];
    pub const TITLE: &[u8] = &[0x55, 0x04, 0x0c];
    pub const NAME: &[u8] = &[0x55, 0x04, 0x29];
    pub const GIVEN_NAME: &[u8] = &[0x55, 0x04, 0x2a];
    pub const INITIALS: &[u8] = &[0x55, 0x04, 0x2b];
    pub const GENERATION_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2c];
    pub const DN_QUALIFIER: &[u8] = &[0x55, 0x04, 0x2e];
    pub const PSEUDONYM: &[u8] = &[0x55, 0x04, 0x41];
}

/// Certificate extension OIDs under joint-iso-itu-t(2).ds(5).certExt(29).
pub mod extension {
    pub const SUBJECT_DIRECTORY_ATTRIBUTE: &[u8] = &[0x55, 0x1d, 0x09];
    pub const SUBJECT_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x0e];
    pub const KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x0f];
    pub const SUBJECT_ALT_NAME: &[u8] = &[0x55, 0x1d, 0x11];
    pub const ISSUER_ALT_NAME: &[u8] = &[0x55, 0x1d, 0x12];
    pub const BASIC_CONSTRAINTS: &[u8] = &[0x55, 0x1d, 0x13];
    pub const NAME_CONSTRAINTS: &[u8] = &[0x55, 0x1d, 0x1e];
    pub const CRL_DISTRIBUTION_POINTS: &[u8] = &[0x55, 0x1d, 0x1f];
    pub const CERTIFICATE_POLICIES: &[u8] = &[0x55, 0x1d, 0x20];
    pub const POLICY_MAPPINGS: &[u8] = &[0x55, 0x1d, 0x21];
    pub const AUTHORITY_KEY_IDENTIFIER: &[u8] = &[0x55, 0x1d, 0x23];
    pub const POLICY_CONSTRAINTS: &[u8] = &[0x55, 0x1d, 0x24];
    pub const EXTENDED_KEY_USAGE: &[u8] = &[0x55, 0x1d, 0x25];
    pub const FRESHEST_CRL: &[u8] = &[0x55, 0x1d, 0x2e];
    pub const INHIBIT_ANY_POLICY: &[u8] = &[0x55, 0x1d, 0x36];
    /// Netscape certificate type, 2.16.840.1.113730.1.1. Not a standards-track
    /// extension, but common enough in older CA output to be worth decoding.
    pub const NETSCAPE_CERT_TYPE: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x86, 0xf8, 0x42, 0x01, 0x01];
}

/// SubjectPublicKeyInfo algorithm OIDs.
pub mod spki_algorithm {
    pub const RSA_ENCRYPTION: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01];
    pub const DSA: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x01];
    pub const EC_PUBLIC_KEY: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];
}

/// Signature algorithm OIDs (the certificate's outer `signatureAlgorithm`
/// and `tbsCertificate.signature` fields).
pub mod signature_algorithm {
    pub const SHA1_WITH_RSA: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x05];
    pub const SHA256_WITH_RSA: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b];
    pub const SHA384_WITH_RSA: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0c];
    pub const SHA512_WITH_RSA: &[u8] = &[0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0d];

    pub const DSA_WITH_SHA1: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x38, 0x04, 0x03];
    pub const DSA_WITH_SHA224: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x03, 0x01];
    pub const DSA_WITH_SHA256: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x03, 0x02];

    pub const ECDSA_WITH_SHA1: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x01];
    pub const ECDSA_WITH_SHA256: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x02];
    pub const ECDSA_WITH_SHA384: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x03];
    pub const ECDSA_WITH_SHA512: &[u8] = &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x04, 0x03, 0x04];
}

/// Parse a dotted-decimal OID string (`"1.2.840.113549.1.1.1"`) into its
/// DER content octets. Display/debug convenience only; not used to
/// recognize known OIDs on the decode path.
pub fn from_string(oid: &str) -> Result<Vec<u8>, crate::der::DerError> {
    let arcs: Vec<u64> = oid
        .split('.')
        .map(|part| {
            part.parse::<u64>().map_err(|e| {
                crate::der::DerErrorKind::InvalidLength.error_with_msg(&e.to_string())
            })
        })
        .collect::<Result<_, _>>()?;
    if arcs.len() < 2 {
        return Err(crate::der::DerErrorKind::InvalidLength
            .error_with_msg("an OID needs at least two arcs"));
    }
    let mut out = vec![(arcs[0] * 40 + arcs[1]) as u8];
    for &arc in &arcs[2..] {
        out.extend(encode_arc(arc));
    }
    Ok(out)
}

fn encode_arc(mut arc: u64) -> Vec<u8> {
    let mut digits = vec![(arc & 0x7f) as u8];
    arc >>= 7;
    while arc > 0 {
        digits.push(((arc & 0x7f) as u8) | 0x80);
        arc >>= 7;
    }
    digits.reverse();
    digits
}

/// Render an OID's DER content octets as a dotted-decimal string, for
/// logging and `Display` impls. Malformed input (which should not occur
/// downstream of [crate::der::decode_object_identifier]) renders as best-effort.
pub fn as_string(oid: &[u8]) -> String {
    if oid.is_empty() {
        return String::new();
    }
    let first = oid[0];
    let mut arcs = vec![(first / 40) as u64, (first % 40) as u64];
    let mut value: u64 = 0;
    for &b in &oid[1..] {
        value = (value << 7) | (b & 0x7f) as u64;
        if b & 0x80 == 0 {
            arcs.push(value);
            value = 0;
        }
    }
    arcs.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_oids_roundtrip_through_display() {
        assert_eq!(as_string(attribute::COMMON_NAME), "2.5.4.3");
        assert_eq!(as_string(extension::BASIC_CONSTRAINTS), "2.5.29.19");
        assert_eq!(as_string(spki_algorithm::RSA_ENCRYPTION), "1.2.840.113549.1.1.1");
        assert_eq!(
            as_string(signature_algorithm::ECDSA_WITH_SHA384),
            "1.2.840.10045.4.3.3"
        );
        assert_eq!(as_string(extension::NETSCAPE_CERT_TYPE), "2.16.840.1.113730.1.1");
    }

    #[test]
    fn from_string_matches_constants() {
        assert_eq!(from_string("2.5.4.3").unwrap(), attribute::COMMON_NAME);
        assert_eq!(
            from_string("1.2.840.113549.1.1.11").unwrap(),
            signature_algorithm::SHA256_WITH_RSA
        );
        assert_eq!(
            from_string("2.16.840.1.113730.1.1").unwrap(),
            extension::NETSCAPE_CERT_TYPE
        );
    }
}
