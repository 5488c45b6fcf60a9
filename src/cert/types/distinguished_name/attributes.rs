//! The RDN attribute types this crate recognizes.

use crate::oid::attribute as oid;

/// One of the attribute types §4.4 requires a decoder recognize inside a
/// Name's RelativeDistinguishedNames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownAttribute {
    /// 2.5.4.3
    CommonName,
    /// 2.5.4.4
    Surname,
    /// 2.5.4.5
    SerialNumber,
    /// 2.5.4.6
    CountryName,
    /// 2.5.4.7
    LocalityName,
    /// 2.5.4.8
    StateOrProvinceName,
    /// 2.5.4.10
    OrganizationName,
    /// 2.5.4.11
    OrganizationalUnitName,
    /// 2.5.4.12
    Title,
    /// 2.5.4.41
    Name,
    /// 2.5.4.42
    GivenName,
    /// 2.5.4.43
    Initials,
    /// 2.5.4.44
    GenerationQualifier,
    /// 2.5.4.46
    DnQualifier,
    /// 2.5.4.65
    Pseudonym,
}

impl WellKnownAttribute {
    /// Recognize an attribute by its DER-encoded OID content octets.
    pub fn from_oid(oid_bytes: &[u8]) -> Option<Self> {
        Some(match oid_bytes {
            b if b == oid::COMMON_NAME => Self::CommonName,
            b if b == oid::SURNAME => Self::Surname,
            b if b == oid::SERIAL_NUMBER => Self::SerialNumber,
            b if b == oid::COUNTRY_NAME => Self::CountryName,
            b if b == oid::LOCALITY_NAME => Self::LocalityName,
            b if b == oid::STATE_OR_PROVINCE_NAME => Self::StateOrProvinceName,
            b if b == oid::ORGANIZATION_NAME => Self::OrganizationName,
            b if b == oid::ORGANIZATIONAL_UNIT_NAME => Self::OrganizationalUnitName,
            b if b == oid::TITLE => Self::Title,
            b if b == oid::NAME => Self::Name,
            b if b == oid::GIVEN_NAME => Self::GivenName,
            b if b == oid::INITIALS => Self::Initials,
            b if b == oid::GENERATION_QUALIFIER => Self::GenerationQualifier,
            b if b == oid::DN_QUALIFIER => Self::DnQualifier,
            b if b == oid::PSEUDONYM => Self::Pseudonym,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_table_entry() {
        assert_eq!(
            WellKnownAttribute::from_oid(oid::COMMON_NAME),
            Some(WellKnownAttribute::CommonName)
        );
        assert_eq!(
            WellKnownAttribute::from_oid(oid::PSEUDONYM),
            Some(WellKnownAttribute::Pseudonym)
        );
    }

    #[test]
    fn unknown_oid_is_none() {
        assert_eq!(WellKnownAttribute::from_oid(&[0x55, 0x04, 0x63]), None);
    }
}
