//! Decoders for the ASN.1 primitive content octets the certificate parser
//! needs, operating on the `content` slice a [super::reader::Tlv] already
//! isolated. None of these allocate; all return borrowed views or small
//! machine values.

use super::error::{DerError, DerErrorKind};
use super::reader::tag;

/// A decoded INTEGER: either small enough to live in an `i64`, or exposed
/// as its raw two's-complement big-endian bytes (serial numbers, RSA/DSA
/// key material).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer<'a> {
    /// Fits in a machine word.
    Small(i64),
    /// Preserved verbatim, including any leading sign byte.
    Big(&'a [u8]),
}

impl<'a> Integer<'a> {
    /// The raw content octets this integer was decoded from.
    pub fn as_bytes(&self, original: &'a [u8]) -> &'a [u8] {
        match self {
            Integer::Small(_) => original,
            Integer::Big(b) => b,
        }
    }

    /// Interpret as a non-negative `usize`, used for version numbers and
    /// path-length constraints. Negative values are rejected by the caller's
    /// own range check, not here.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Integer::Small(v) => Some(*v),
            Integer::Big(bytes) => {
                if bytes.len() > 8 {
                    return None;
                }
                let negative = bytes[0] & 0x80 != 0;
                let mut buf = [if negative { 0xff } else { 0x00 }; 8];
                buf[8 - bytes.len()..].copy_from_slice(bytes);
                Some(i64::from_be_bytes(buf))
            }
        }
    }
}

/// Decode INTEGER content octets, rejecting non-minimal two's-complement
/// encodings (leading 0x00 followed by a clear high bit, or leading 0xFF
/// followed by a set high bit).
pub fn decode_integer(content: &[u8]) -> Result<Integer<'_>, DerError> {
    if content.is_empty() {
        return Err(DerErrorKind::NonMinimalInteger.error_with_msg("empty INTEGER content"));
    }
    if content.len() > 1 {
        let redundant_zero = content[0] == 0x00 && content[1] & 0x80 == 0;
        let redundant_ff = content[0] == 0xff && content[1] & 0x80 != 0;
        if redundant_zero || redundant_ff {
            return Err(DerErrorKind::NonMinimalInteger
                .error_with_msg("non-minimal two's-complement INTEGER encoding"));
        }
    }
    if content.len() <= 8 {
        let negative = content[0] & 0x80 != 0;
        let mut buf = [if negative { 0xff } else { 0x00 }; 8];
        buf[8 - content.len()..].copy_from_slice(content);
        Ok(Integer::Small(i64::from_be_bytes(buf)))
    } else {
        Ok(Integer::Big(content))
    }
}

/// Decode an OBJECT IDENTIFIER's raw content octets. DER comparisons are
/// always done against this byte slice directly; arc decoding into decimal
/// is a display-only concern handled by [crate::oid].
pub fn decode_object_identifier(content: &[u8]) -> Result<&[u8], DerError> {
    if content.is_empty() {
        return Err(DerErrorKind::InvalidLength.error_with_msg("empty OBJECT IDENTIFIER content"));
    }
    // Validate arc encoding (base-128, no leading 0x80 continuation byte per arc)
    // without materializing the decoded arcs; a hand-rolled decoder must still
    // reject malformed relative-OID octets rather than passing them through.
    let mut i = 0;
    while i < content.len() {
        let mut first = true;
        loop {
            if i >= content.len() {
                return Err(DerErrorKind::InvalidLength
                    .error_with_msg("truncated OBJECT IDENTIFIER arc"));
            }
            let b = content[i];
            if first && b == 0x80 {
                return Err(DerErrorKind::InvalidLength
                    .error_with_msg("non-minimal OBJECT IDENTIFIER arc encoding"));
            }
            first = false;
            i += 1;
            if b & 0x80 == 0 {
                break;
            }
        }
    }
    Ok(content)
}

/// Decode a BOOLEAN's single content octet: 0x00 is false, 0xFF is true,
/// anything else is rejected (BER allows any non-zero value as true; DER
/// requires exactly 0xFF).
pub fn decode_boolean(content: &[u8]) -> Result<bool, DerError> {
    match content {
        [0x00] => Ok(false),
        [0xff] => Ok(true),
        _ => Err(DerErrorKind::BadBooleanEncoding
            .error_with_msg("BOOLEAN content must be exactly 0x00 or 0xFF")),
    }
}

/// A decoded BIT STRING: the number of unused trailing bits in the final
/// octet, and the octets themselves (borrowed, unmasked).
#[derive(Debug, Clone, Copy)]
pub struct BitStringValue<'a> {
    /// Count of padding bits in `[0, 7]` at the end of the last octet.
    pub unused_bits: u8,
    /// The octets, including the padding bits in the final byte.
    pub octets: &'a [u8],
}

impl<'a> BitStringValue<'a> {
    /// Return the octets with the unused trailing bits masked to zero.
    /// Panics never; on a zero-length value this simply returns an empty slice.
    pub fn masked(&self) -> Vec<u8> {
        let mut out = self.octets.to_vec();
        if let Some(last) = out.last_mut() {
            let mask = !0u8 << self.unused_bits;
            *last &= mask;
        }
        out
    }

    /// Read bit `index` (0 = most significant bit of the first octet), the
    /// convention RFC 5280 uses for KeyUsage and NetscapeCertType bitmaps.
    pub fn bit(&self, index: usize) -> bool {
        let byte_index = index / 8;
        let bit_index = index % 8;
        self.octets
            .get(byte_index)
            .map(|byte| byte & (0x80 >> bit_index) != 0)
            .unwrap_or(false)
    }
}

/// Decode a BIT STRING's raw content octets.
pub fn decode_bit_string(content: &[u8]) -> Result<BitStringValue<'_>, DerError> {
    if content.is_empty() {
        return Err(DerErrorKind::BadBitStringPadding
            .error_with_msg("empty BIT STRING is missing the unused-bits octet"));
    }
    let unused_bits = content[0];
    let octets = &content[1..];
    if unused_bits > 7 {
        return Err(DerErrorKind::BadBitStringPadding
            .error_with_msg("unused-bits count out of range [0,7]"));
    }
    if unused_bits > 0 && octets.is_empty() {
        return Err(DerErrorKind::BadBitStringPadding
            .error_with_msg("unused bits declared on an empty BIT STRING"));
    }
    if let Some(&last) = octets.last() {
        let mask = (1u8 << unused_bits).wrapping_sub(1);
        if last & mask != 0 {
            return Err(DerErrorKind::BadBitStringPadding
                .error_with_msg("non-zero padding bits in BIT STRING"));
        }
    }
    Ok(BitStringValue {
        unused_bits,
        octets,
    })
}

/// Tag identifying which ASN.1 string type a borrowed string value came
/// from. No transcoding is performed; the caller interprets `content`
/// according to this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    /// `PrintableString`.
    Printable,
    /// `UTF8String`.
    Utf8,
    /// `IA5String` (7-bit ASCII).
    Ia5,
    /// `TeletexString` / `T61String`.
    Teletex,
    /// `BMPString` (UCS-2).
    Bmp,
    /// `UniversalString` (UCS-4).
    Universal,
}

impl StringEncoding {
    fn from_tag(t: u32) -> Option<Self> {
        match t {
            tag::PRINTABLE_STRING => Some(Self::Printable),
            tag::UTF8_STRING => Some(Self::Utf8),
            tag::IA5_STRING => Some(Self::Ia5),
            tag::T61_STRING => Some(Self::Teletex),
            tag::BMP_STRING => Some(Self::Bmp),
            tag::UNIVERSAL_STRING => Some(Self::Universal),
            _ => None,
        }
    }
}

/// A borrowed string value plus the encoding tag it was read under.
#[derive(Debug, Clone, Copy)]
pub struct StringValue<'a> {
    /// Which ASN.1 string type this came from.
    pub encoding: StringEncoding,
    /// The raw content octets, uninterpreted.
    pub content: &'a [u8],
}

/// Decode a string primitive given its universal tag number and content.
pub fn decode_string(universal_tag: u32, content: &[u8]) -> Result<StringValue<'_>, DerError> {
    let encoding = StringEncoding::from_tag(universal_tag).ok_or_else(|| {
        DerErrorKind::UnsupportedStringEncoding
            .error_with_msg(&format!("unrecognized string tag {universal_tag}"))
    })?;
    if encoding == StringEncoding::Printable {
        for &b in content {
            let ok = b.is_ascii_alphanumeric()
                || matches!(b, b' ' | b'\'' | b'(' | b')' | b'+' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?');
            if !ok {
                return Err(DerErrorKind::UnsupportedStringEncoding
                    .error_with_msg("byte outside the PrintableString character set"));
            }
        }
    }
    if encoding == StringEncoding::Utf8 && std::str::from_utf8(content).is_err() {
        return Err(DerErrorKind::UnsupportedStringEncoding
            .error_with_msg("UTF8String content is not valid UTF-8"));
    }
    if encoding == StringEncoding::Ia5 && !content.is_ascii() {
        return Err(DerErrorKind::UnsupportedStringEncoding
            .error_with_msg("IA5String content is not 7-bit ASCII"));
    }
    Ok(StringValue { encoding, content })
}

/// A decoded Time value, normalized to UTC epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Time {
    /// Seconds since the Unix epoch, UTC.
    pub epoch_seconds: i64,
}

/// Decode a UTCTime (`YYMMDDHHMMSSZ`) or GeneralizedTime (`YYYYMMDDHHMMSSZ`)
/// content slice. Only the trailing `Z` (UTC) form is accepted; fractional
/// seconds and explicit offsets are rejected.
pub fn decode_time(universal_tag: u32, content: &[u8]) -> Result<Time, DerError> {
    let s = std::str::from_utf8(content).map_err(|_| {
        DerErrorKind::UnsupportedTimeFormat.error_with_msg("Time content is not ASCII")
    })?;
    let (year, rest) = match universal_tag {
        tag::UTC_TIME => {
            if s.len() != 13 || !s.ends_with('Z') {
                return Err(DerErrorKind::UnsupportedTimeFormat
                    .error_with_msg("UTCTime must be YYMMDDHHMMSSZ"));
            }
            let yy: i32 = s[0..2]
                .parse()
                .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad UTCTime year"))?;
            let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
            (year, &s[2..12])
        }
        tag::GENERALIZED_TIME => {
            if s.len() != 15 || !s.ends_with('Z') {
                return Err(DerErrorKind::UnsupportedTimeFormat
                    .error_with_msg("GeneralizedTime must be YYYYMMDDHHMMSSZ, no fractional seconds"));
            }
            let year: i32 = s[0..4].parse().map_err(|_| {
                DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad GeneralizedTime year")
            })?;
            (year, &s[4..14])
        }
        _ => {
            return Err(DerErrorKind::UnsupportedTimeFormat
                .error_with_msg("tag is neither UTCTime nor GeneralizedTime"))
        }
    };
    let month: u32 = rest[0..2]
        .parse()
        .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad month"))?;
    let day: u32 = rest[2..4]
        .parse()
        .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad day"))?;
    let hour: u32 = rest[4..6]
        .parse()
        .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad hour"))?;
    let minute: u32 = rest[6..8]
        .parse()
        .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad minute"))?;
    let second: u32 = rest[8..10]
        .parse()
        .map_err(|_| DerErrorKind::UnsupportedTimeFormat.error_with_msg("bad second"))?;
    let date = chrono::NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DerErrorKind::UnsupportedTimeFormat.error_with_msg("invalid calendar date")
    })?;
    let time = chrono::NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        DerErrorKind::UnsupportedTimeFormat.error_with_msg("invalid time of day")
    })?;
    let naive = chrono::NaiveDateTime::new(date, time);
    Ok(Time {
        epoch_seconds: naive.and_utc().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integer_roundtrips() {
        let content = [0x00, 0xff]; // +255, needs leading zero to stay positive
        let i = decode_integer(&content).unwrap();
        assert_eq!(i.as_i64(), Some(255));
    }

    #[test]
    fn rejects_non_minimal_integer() {
        let content = [0x00, 0x00, 0x01];
        assert!(decode_integer(&content).is_err());
        let content_neg = [0xff, 0xff, 0x01];
        assert!(decode_integer(&content_neg).is_err());
    }

    #[test]
    fn big_integer_preserved_verbatim() {
        let mut content = vec![0x00];
        content.extend_from_slice(&[0xAA; 16]);
        let i = decode_integer(&content).unwrap();
        match i {
            Integer::Big(bytes) => assert_eq!(bytes, content.as_slice()),
            Integer::Small(_) => panic!("expected Big"),
        }
    }

    #[test]
    fn boolean_strict() {
        assert_eq!(decode_boolean(&[0x00]).unwrap(), false);
        assert_eq!(decode_boolean(&[0xff]).unwrap(), true);
        assert!(decode_boolean(&[0x01]).is_err());
    }

    #[test]
    fn bit_string_masking() {
        // 3 unused bits, content bits 10100000 -> valid since low 3 bits are 0
        let bs = decode_bit_string(&[0x03, 0b1010_0000]).unwrap();
        assert_eq!(bs.masked(), vec![0b1010_0000]);
        assert!(bs.bit(0));
        assert!(!bs.bit(1));
        assert!(bs.bit(2));
    }

    #[test]
    fn bit_string_rejects_nonzero_padding() {
        assert!(decode_bit_string(&[0x03, 0b1010_0001]).is_err());
    }

    #[test]
    fn utc_time_pivot_year() {
        let t1 = decode_time(tag::UTC_TIME, b"250101000000Z").unwrap();
        let t2 = decode_time(tag::UTC_TIME, b"491231235959Z").unwrap();
        assert!(t1.epoch_seconds < t2.epoch_seconds);
        let t3 = decode_time(tag::UTC_TIME, b"500101000000Z").unwrap();
        // 50 -> 1950, far earlier than 2025/2049.
        assert!(t3.epoch_seconds < t1.epoch_seconds);
    }

    #[test]
    fn generalized_time_rejects_fractional_seconds() {
        assert!(decode_time(tag::GENERALIZED_TIME, b"20500101000000.5Z").is_err());
    }

    #[test]
    fn oid_content_passthrough() {
        let content = [0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01]; // rsaEncryption
        assert_eq!(decode_object_identifier(&content).unwrap(), &content[..]);
    }
}
