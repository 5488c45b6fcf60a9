//! X.501 `Name` (RDNSequence) parsing.

pub mod attributes;

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::der::reader::{tag, Class};
use crate::der::{decode_string, read_tlv, read_tlv_expect, StringValue};
use attributes::WellKnownAttribute;

/// A parsed X.501 Name: the attributes RFC 5280 and this crate's attribute
/// table recognize, plus the untouched raw DER of the whole RDNSequence.
///
/// `raw` is what [crate::cert::validate] compares byte-for-byte between a
/// certificate's issuer and its issuer certificate's subject (P2).
#[derive(Debug, Clone, Copy, Default)]
pub struct Name<'a> {
    /// The complete `Name` SEQUENCE, header included.
    pub raw: &'a [u8],
    /// `commonName` (2.5.4.3).
    pub common_name: Option<StringValue<'a>>,
    /// `surname` (2.5.4.4).
    pub surname: Option<StringValue<'a>>,
    /// `serialNumber` (2.5.4.5) — the DN attribute, not the certificate's serial.
    pub serial_number: Option<StringValue<'a>>,
    /// `countryName` (2.5.4.6).
    pub country: Option<StringValue<'a>>,
    /// `localityName` (2.5.4.7).
    pub locality: Option<StringValue<'a>>,
    /// `stateOrProvinceName` (2.5.4.8).
    pub state: Option<StringValue<'a>>,
    /// `organizationName` (2.5.4.10).
    pub organization: Option<StringValue<'a>>,
    /// `organizationalUnitName` (2.5.4.11).
    pub organizational_unit: Option<StringValue<'a>>,
    /// `title` (2.5.4.12).
    pub title: Option<StringValue<'a>>,
    /// `name` (2.5.4.41).
    pub name: Option<StringValue<'a>>,
    /// `givenName` (2.5.4.42).
    pub given_name: Option<StringValue<'a>>,
    /// `initials` (2.5.4.43).
    pub initials: Option<StringValue<'a>>,
    /// `generationQualifier` (2.5.4.44).
    pub generation_qualifier: Option<StringValue<'a>>,
    /// `dnQualifier` (2.5.4.46).
    pub dn_qualifier: Option<StringValue<'a>>,
    /// `pseudonym` (2.5.4.65).
    pub pseudonym: Option<StringValue<'a>>,
}

impl<'a> Name<'a> {
    fn set(&mut self, attribute: WellKnownAttribute, value: StringValue<'a>) {
        let slot = match attribute {
            WellKnownAttribute::CommonName => &mut self.common_name,
            WellKnownAttribute::Surname => &mut self.surname,
            WellKnownAttribute::SerialNumber => &mut self.serial_number,
            WellKnownAttribute::CountryName => &mut self.country,
            WellKnownAttribute::LocalityName => &mut self.locality,
            WellKnownAttribute::StateOrProvinceName => &mut self.state,
            WellKnownAttribute::OrganizationName => &mut self.organization,
            WellKnownAttribute::OrganizationalUnitName => &mut self.organizational_unit,
            WellKnownAttribute::Title => &mut self.title,
            WellKnownAttribute::Name => &mut self.name,
            WellKnownAttribute::GivenName => &mut self.given_name,
            WellKnownAttribute::Initials => &mut self.initials,
            WellKnownAttribute::GenerationQualifier => &mut self.generation_qualifier,
            WellKnownAttribute::DnQualifier => &mut self.dn_qualifier,
            WellKnownAttribute::Pseudonym => &mut self.pseudonym,
        };
        // First occurrence wins; later repeats of the same attribute type are ignored.
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

/// Parse a `Name ::= RDNSequence` from the head of `input`.
pub fn parse_name(input: &[u8]) -> Result<(Name<'_>, &[u8]), ParsingError> {
    let (sequence, rest) = read_tlv_expect(input, Class::Universal, tag::SEQUENCE)?;
    let mut name = Name {
        raw: sequence.whole,
        ..Default::default()
    };
    let mut remaining = sequence.content;
    while !remaining.is_empty() {
        let (rdn, after_rdn) = read_tlv_expect(remaining, Class::Universal, tag::SET)?;
        remaining = after_rdn;
        let mut atav_remaining = rdn.content;
        while !atav_remaining.is_empty() {
            let (atav, after_atav) =
                read_tlv_expect(atav_remaining, Class::Universal, tag::SEQUENCE)?;
            atav_remaining = after_atav;
            parse_attribute_type_and_value(atav.content, &mut name)?;
        }
    }
    Ok((name, rest))
}

fn parse_attribute_type_and_value<'a>(
    content: &'a [u8],
    name: &mut Name<'a>,
) -> Result<(), ParsingError> {
    let (oid_tlv, rest) = read_tlv_expect(content, Class::Universal, tag::OBJECT_IDENTIFIER)?;
    let oid = crate::der::decode_object_identifier(oid_tlv.content)?;
    let (value_tlv, rest) = read_tlv(rest)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("AttributeTypeAndValue has more than two elements"));
    }
    if let Some(attribute) = WellKnownAttribute::from_oid(oid) {
        // Attribute values we don't know how to render as a string (e.g. a
        // DirectoryString alternative this crate doesn't decode) are simply
        // left unset rather than failing the whole Name.
        if value_tlv.class == Class::Universal {
            if let Ok(s) = decode_string(value_tlv.tag, value_tlv.content) {
                name.set(attribute, s);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn der_sequence(tag_byte: u8, content: &[u8]) -> Vec<u8> {
        let mut out = vec![tag_byte, content.len() as u8];
        out.extend_from_slice(content);
        out
    }

    fn printable_string(s: &str) -> Vec<u8> {
        der_sequence(0x13, s.as_bytes())
    }

    fn oid(bytes: &[u8]) -> Vec<u8> {
        der_sequence(0x06, bytes)
    }

    fn atav(oid_bytes: &[u8], value: &[u8]) -> Vec<u8> {
        let mut content = oid(oid_bytes);
        content.extend_from_slice(value);
        der_sequence(0x30, &content)
    }

    #[test]
    fn parses_common_name_and_country() {
        let cn_atav = atav(
            crate::oid::attribute::COMMON_NAME,
            &printable_string("example.com"),
        );
        let c_atav = atav(crate::oid::attribute::COUNTRY_NAME, &printable_string("SE"));
        let rdn1 = der_sequence(0x31, &cn_atav);
        let rdn2 = der_sequence(0x31, &c_atav);
        let mut rdn_sequence_content = rdn1;
        rdn_sequence_content.extend_from_slice(&rdn2);
        let name_der = der_sequence(0x30, &rdn_sequence_content);

        let (name, rest) = parse_name(&name_der).unwrap();
        assert!(rest.is_empty());
        assert_eq!(name.common_name.unwrap().content, b"example.com");
        assert_eq!(name.country.unwrap().content, b"SE");
        assert_eq!(name.raw, name_der.as_slice());
    }

    #[test]
    fn first_occurrence_of_duplicate_attribute_wins() {
        let first = atav(crate::oid::attribute::COMMON_NAME, &printable_string("first"));
        let second = atav(crate::oid::attribute::COMMON_NAME, &printable_string("second"));
        let rdn = der_sequence(0x31, &{
            let mut c = first;
            c.extend_from_slice(&second);
            c
        });
        let name_der = der_sequence(0x30, &rdn);
        let (name, _) = parse_name(&name_der).unwrap();
        assert_eq!(name.common_name.unwrap().content, b"first");
    }

    #[test]
    fn unrecognized_attribute_is_ignored() {
        let unknown = atav(&[0x55, 0x04, 0x63], &printable_string("whatever")); // 2.5.4.99, not in our table
        let rdn = der_sequence(0x31, &unknown);
        let name_der = der_sequence(0x30, &rdn);
        let (name, _) = parse_name(&name_der).unwrap();
        assert!(name.common_name.is_none());
    }
}
