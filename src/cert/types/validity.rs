//! `Validity` (notBefore/notAfter) parsing.

use crate::cert::parse::parsing_error::ParsingError;
use crate::der::reader::{tag, Class};
use crate::der::{decode_time, peek_tag, read_tlv_expect};

/// A certificate's validity window, normalized to UTC epoch seconds.
///
/// `notBefore <= notAfter` is not enforced here — RFC 5280 does not make
/// this a parse-time concern, and callers who rely on it go through
/// [crate::cert::validate].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    /// Start of the validity window, UTC epoch seconds.
    pub not_before: i64,
    /// End of the validity window, UTC epoch seconds.
    pub not_after: i64,
}

impl Validity {
    /// True when `at_epoch_seconds` falls within `[not_before, not_after]`.
    pub fn is_valid_at(&self, at_epoch_seconds: i64) -> bool {
        at_epoch_seconds >= self.not_before && at_epoch_seconds <= self.not_after
    }
}

/// Parse `Validity ::= SEQUENCE { notBefore Time, notAfter Time }`.
pub fn parse_validity(input: &[u8]) -> Result<(Validity, &[u8]), ParsingError> {
    let (sequence, rest) = read_tlv_expect(input, Class::Universal, tag::SEQUENCE)?;
    let (not_before, after_nb) = parse_time(sequence.content)?;
    let (not_after, trailing) = parse_time(after_nb)?;
    if !trailing.is_empty() {
        return Err(crate::cert::parse::parsing_error::ParsingErrorKind::TrailingData
            .error_with_msg("Validity has more than two Time values"));
    }
    Ok((
        Validity {
            not_before: not_before.epoch_seconds,
            not_after: not_after.epoch_seconds,
        },
        rest,
    ))
}

fn parse_time(input: &[u8]) -> Result<(crate::der::Time, &[u8]), ParsingError> {
    let (class, universal_tag, _) = peek_tag(input).ok_or_else(|| {
        crate::der::DerErrorKind::TruncatedInput.error_with_msg("missing Time value")
    })?;
    if class != Class::Universal || (universal_tag != tag::UTC_TIME && universal_tag != tag::GENERALIZED_TIME) {
        return Err(crate::cert::parse::parsing_error::ParsingErrorKind::UnexpectedTag
            .error_with_msg("expected UTCTime or GeneralizedTime"));
    }
    let (tlv, rest) = read_tlv_expect(input, Class::Universal, universal_tag)?;
    let time = decode_time(universal_tag, tlv.content)?;
    Ok((time, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validity_der(not_before: &[u8], not_after: &[u8]) -> Vec<u8> {
        let mut content = not_before.to_vec();
        content.extend_from_slice(not_after);
        let mut out = vec![0x30, content.len() as u8];
        out.extend_from_slice(&content);
        out
    }

    #[test]
    fn parses_utc_time_pair() {
        let nb = [0x17, 0x0d, b'2', b'4', b'0', b'1', b'0', b'1', b'0', b'0', b'0', b'0', b'0', b'0', b'Z'];
        let na = [0x17, 0x0d, b'3', b'4', b'0', b'1', b'0', b'1', b'0', b'0', b'0', b'0', b'0', b'0', b'Z'];
        let der = validity_der(&nb, &na);
        let (validity, rest) = parse_validity(&der).unwrap();
        assert!(rest.is_empty());
        assert!(validity.not_before < validity.not_after);
        assert!(validity.is_valid_at(validity.not_before));
        assert!(!validity.is_valid_at(validity.not_after + 1));
    }
}
