//! `GeneralName` decoding, used by SubjectAltName and IssuerAltName.

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::der::reader::Class;
use crate::der::{decode_object_identifier, read_tlv};

/// Which of the nine `GeneralName` CHOICE arms was tagged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GeneralNameTag {
    /// `[0] otherName`.
    OtherName,
    /// `[1] rfc822Name`.
    Rfc822,
    /// `[2] dNSName`.
    Dns,
    /// `[3] x400Address`.
    X400,
    /// `[4] directoryName`.
    DirectoryName,
    /// `[5] ediPartyName`.
    EdiParty,
    /// `[6] uniformResourceIdentifier`.
    Uri,
    /// `[7] iPAddress`.
    IpAddress,
    /// `[8] registeredID`.
    RegisteredId,
}

impl GeneralNameTag {
    fn from_context_tag(t: u32) -> Option<Self> {
        Some(match t {
            0 => Self::OtherName,
            1 => Self::Rfc822,
            2 => Self::Dns,
            3 => Self::X400,
            4 => Self::DirectoryName,
            5 => Self::EdiParty,
            6 => Self::Uri,
            7 => Self::IpAddress,
            8 => Self::RegisteredId,
            _ => return None,
        })
    }
}

/// One decoded `GeneralName`: its type tag plus a borrowed view of its
/// content octets. `Rfc822`/`Dns`/`Uri` content is IA5 text; `IpAddress`
/// content is 4 or 16 raw octets; `RegisteredId` content is OID arcs;
/// `OtherName`/`X400`/`DirectoryName`/`EdiParty` content is left as an
/// opaque nested-DER slice since this crate does not need to inspect them.
#[derive(Debug, Clone, Copy)]
pub struct GeneralName<'a> {
    /// Which CHOICE arm this is.
    pub tag: GeneralNameTag,
    /// The raw content octets of the `[n]`-tagged value.
    pub value: &'a [u8],
}

impl<'a> GeneralName<'a> {
    /// Interpret `Rfc822`/`Dns`/`Uri` content as ASCII text. `None` for
    /// other tags or non-ASCII content.
    pub fn as_ia5_str(&self) -> Option<&'a str> {
        match self.tag {
            GeneralNameTag::Rfc822 | GeneralNameTag::Dns | GeneralNameTag::Uri => {
                if self.value.is_ascii() {
                    std::str::from_utf8(self.value).ok()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Interpret `IpAddress` content as a 4- or 16-octet address.
    pub fn as_ip_addr(&self) -> Option<std::net::IpAddr> {
        if self.tag != GeneralNameTag::IpAddress {
            return None;
        }
        match self.value.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(self.value);
                Some(std::net::IpAddr::from(octets))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(self.value);
                Some(std::net::IpAddr::from(octets))
            }
            _ => None,
        }
    }

    /// Interpret `RegisteredId` content as OID content octets.
    pub fn as_oid(&self) -> Option<&'a [u8]> {
        (self.tag == GeneralNameTag::RegisteredId).then_some(self.value)
    }
}

/// Read one `[n]`-tagged GeneralName from the head of `input`.
pub fn parse_general_name(input: &[u8]) -> Result<(GeneralName<'_>, &[u8]), ParsingError> {
    let (tlv, rest) = read_tlv(input)?;
    if tlv.class != Class::ContextSpecific {
        return Err(ParsingErrorKind::UnexpectedTag
            .error_with_msg("GeneralName must be a context-specific [n] tag"));
    }
    let tag = GeneralNameTag::from_context_tag(tlv.tag).ok_or_else(|| {
        ParsingErrorKind::UnexpectedTag
            .error_with_msg(&format!("unrecognized GeneralName tag [{}]", tlv.tag))
    })?;
    if tag == GeneralNameTag::RegisteredId {
        decode_object_identifier(tlv.content)?;
    }
    Ok((
        GeneralName {
            tag,
            value: tlv.content,
        },
        rest,
    ))
}

/// A fixed-capacity list of GeneralNames, preserving the no-heap-allocation
/// property of the decoder. `N` defaults to 4 (see [crate::cert::extensions]).
#[derive(Debug, Clone, Copy)]
pub struct GeneralNameList<'a, const N: usize> {
    entries: [Option<GeneralName<'a>>; N],
    len: usize,
}

impl<'a, const N: usize> Default for GeneralNameList<'a, N> {
    fn default() -> Self {
        Self {
            entries: [None; N],
            len: 0,
        }
    }
}

impl<'a, const N: usize> GeneralNameList<'a, N> {
    /// Number of entries actually populated.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no entries are populated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the populated entries.
    pub fn iter(&self) -> impl Iterator<Item = &GeneralName<'a>> {
        self.entries[..self.len].iter().filter_map(|e| e.as_ref())
    }

    fn push(&mut self, name: GeneralName<'a>) -> Result<(), ParsingError> {
        if self.len >= N {
            return Err(ParsingErrorKind::TooManySubjectAltNames
                .error_with_msg(&format!("more than {N} GeneralName entries")));
        }
        self.entries[self.len] = Some(name);
        self.len += 1;
        Ok(())
    }
}

/// Parse a `SEQUENCE OF GeneralName`, capping the result at `N` entries.
/// A list longer than `N` is a [ParsingErrorKind::TooManySubjectAltNames]
/// error rather than silent truncation, per the compile-time SAN cap.
pub fn parse_general_name_sequence<const N: usize>(
    content: &[u8],
) -> Result<GeneralNameList<'_, N>, ParsingError> {
    let mut list = GeneralNameList::default();
    let mut remaining = content;
    while !remaining.is_empty() {
        let (name, rest) = parse_general_name(remaining)?;
        list.push(name)?;
        remaining = rest;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_dns_name() {
        let der = [0x82, 0x0b, b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.', b'c', b'o', b'm'];
        let (gn, rest) = parse_general_name(&der).unwrap();
        assert!(rest.is_empty());
        assert_eq!(gn.tag, GeneralNameTag::Dns);
        assert_eq!(gn.as_ia5_str(), Some("example.com"));
    }

    #[test]
    fn caps_san_list_at_n() {
        let one = [0x82, 0x01, b'a'];
        let mut content = vec![];
        for _ in 0..5 {
            content.extend_from_slice(&one);
        }
        let result = parse_general_name_sequence::<4>(&content);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_exactly_n() {
        let one = [0x82, 0x01, b'a'];
        let mut content = vec![];
        for _ in 0..4 {
            content.extend_from_slice(&one);
        }
        let list = parse_general_name_sequence::<4>(&content).unwrap();
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn decodes_ip_address() {
        let der = [0x87, 0x04, 127, 0, 0, 1];
        let (gn, _) = parse_general_name(&der).unwrap();
        assert_eq!(gn.as_ip_addr(), Some(std::net::IpAddr::from([127, 0, 0, 1])));
    }
}
