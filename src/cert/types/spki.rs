//! `SubjectPublicKeyInfo` parsing, with dispatch on the algorithm OID.

use crate::cert::parse::parsing_error::{ParsingError, ParsingErrorKind};
use crate::der::reader::{tag, Class};
use crate::der::{decode_bit_string, decode_integer, decode_object_identifier, read_tlv_expect};
use crate::oid::spki_algorithm;

/// The decoded public key material, one variant per algorithm family this
/// crate understands.
#[derive(Debug, Clone, Copy)]
pub enum SpkiKey<'a> {
    /// `rsaEncryption`: modulus and public exponent, each the raw two's
    /// complement INTEGER content octets.
    Rsa { n: &'a [u8], e: &'a [u8] },
    /// `dsa`: domain parameters plus the public value `y`.
    Dsa {
        p: &'a [u8],
        q: &'a [u8],
        g: &'a [u8],
        y: &'a [u8],
    },
    /// `ecPublicKey`: the named-curve OID and the raw EC point octets
    /// (leading 0x04/0x02/0x03 indicates uncompressed/compressed form).
    Ec { curve_oid: &'a [u8], point: &'a [u8] },
}

/// A parsed SubjectPublicKeyInfo.
#[derive(Debug, Clone, Copy)]
pub struct Spki<'a> {
    /// The complete SPKI SEQUENCE, header included — this is what a
    /// [crate::crypto::CryptoProvider] implementation is handed to resolve
    /// the issuer's public key for signature verification.
    pub raw: &'a [u8],
    /// The algorithm OID content octets.
    pub algorithm_oid: &'a [u8],
    /// The decoded key material.
    pub key: SpkiKey<'a>,
}

/// Parse `SubjectPublicKeyInfo ::= SEQUENCE { algorithm AlgorithmIdentifier, subjectPublicKey BIT STRING }`.
pub fn parse_spki(input: &[u8]) -> Result<(Spki<'_>, &[u8]), ParsingError> {
    let (sequence, rest) = read_tlv_expect(input, Class::Universal, tag::SEQUENCE)?;
    let (alg_id, after_alg_id) = read_tlv_expect(sequence.content, Class::Universal, tag::SEQUENCE)?;
    let (oid_tlv, alg_params) = read_tlv_expect(alg_id.content, Class::Universal, tag::OBJECT_IDENTIFIER)?;
    let algorithm_oid = decode_object_identifier(oid_tlv.content)?;

    let (bit_string_tlv, trailing) = read_tlv_expect(after_alg_id, Class::Universal, tag::BIT_STRING)?;
    if !trailing.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("SubjectPublicKeyInfo has trailing data after the BIT STRING"));
    }
    let bit_string = decode_bit_string(bit_string_tlv.content)?;
    let key_octets = bit_string.octets;

    let key = if algorithm_oid == spki_algorithm::RSA_ENCRYPTION {
        parse_rsa_public_key(key_octets)?
    } else if algorithm_oid == spki_algorithm::DSA {
        let (p, q, g) = parse_dsa_parameters(alg_params)?;
        let y = parse_single_integer(key_octets)?;
        SpkiKey::Dsa { p, q, g, y }
    } else if algorithm_oid == spki_algorithm::EC_PUBLIC_KEY {
        let (curve_tlv, trailing) =
            read_tlv_expect(alg_params, Class::Universal, tag::OBJECT_IDENTIFIER)?;
        if !trailing.is_empty() {
            return Err(ParsingErrorKind::TrailingData
                .error_with_msg("ECParameters carries more than the named curve OID"));
        }
        let curve_oid = decode_object_identifier(curve_tlv.content)?;
        SpkiKey::Ec {
            curve_oid,
            point: key_octets,
        }
    } else {
        return Err(ParsingErrorKind::UnsupportedAlgorithm.error_with_msg(&format!(
            "unsupported SubjectPublicKeyInfo algorithm {}",
            crate::oid::as_string(algorithm_oid)
        )));
    };

    Ok((
        Spki {
            raw: sequence.whole,
            algorithm_oid,
            key,
        },
        rest,
    ))
}

/// Decode `RSAPublicKey ::= SEQUENCE { modulus INTEGER, publicExponent INTEGER }`
/// from the unwrapped BIT STRING content.
pub fn parse_rsa_public_key(content: &[u8]) -> Result<SpkiKey<'_>, ParsingError> {
    let (sequence, rest) = read_tlv_expect(content, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("trailing data after RSAPublicKey SEQUENCE"));
    }
    let (n_tlv, after_n) = read_tlv_expect(sequence.content, Class::Universal, tag::INTEGER)?;
    decode_integer(n_tlv.content)?;
    let (e_tlv, trailing) = read_tlv_expect(after_n, Class::Universal, tag::INTEGER)?;
    decode_integer(e_tlv.content)?;
    if !trailing.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("RSAPublicKey has more than modulus and exponent"));
    }
    Ok(SpkiKey::Rsa {
        n: n_tlv.content,
        e: e_tlv.content,
    })
}

fn parse_dsa_parameters(content: &[u8]) -> Result<(&[u8], &[u8], &[u8]), ParsingError> {
    let (sequence, rest) = read_tlv_expect(content, Class::Universal, tag::SEQUENCE)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("trailing data after Dss-Parms SEQUENCE"));
    }
    let (p_tlv, after_p) = read_tlv_expect(sequence.content, Class::Universal, tag::INTEGER)?;
    decode_integer(p_tlv.content)?;
    let (q_tlv, after_q) = read_tlv_expect(after_p, Class::Universal, tag::INTEGER)?;
    decode_integer(q_tlv.content)?;
    let (g_tlv, trailing) = read_tlv_expect(after_q, Class::Universal, tag::INTEGER)?;
    decode_integer(g_tlv.content)?;
    if !trailing.is_empty() {
        return Err(ParsingErrorKind::TrailingData
            .error_with_msg("Dss-Parms has more than p, q, g"));
    }
    Ok((p_tlv.content, q_tlv.content, g_tlv.content))
}

fn parse_single_integer(content: &[u8]) -> Result<&[u8], ParsingError> {
    let (tlv, rest) = read_tlv_expect(content, Class::Universal, tag::INTEGER)?;
    if !rest.is_empty() {
        return Err(ParsingErrorKind::TrailingData.error_with_msg("trailing data after INTEGER"));
    }
    decode_integer(tlv.content)?;
    Ok(tlv.content)
}

/// Read a public key's RSA (n, e) pair if it is one.
pub fn read_rsa_public_key<'a>(spki: &Spki<'a>) -> Option<(&'a [u8], &'a [u8])> {
    match spki.key {
        SpkiKey::Rsa { n, e } => Some((n, e)),
        _ => None,
    }
}

/// Read a public key's DSA (p, q, g, y) tuple if it is one.
pub fn read_dsa_public_key<'a>(spki: &Spki<'a>) -> Option<(&'a [u8], &'a [u8], &'a [u8], &'a [u8])> {
    match spki.key {
        SpkiKey::Dsa { p, q, g, y } => Some((p, q, g, y)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn der_tlv(tag_byte: u8, content: &[u8]) -> Vec<u8> {
        let mut out = vec![tag_byte, content.len() as u8];
        out.extend_from_slice(content);
        out
    }

    #[test]
    fn parses_rsa_spki() {
        let n = der_tlv(0x02, &[0x00, 0xAB, 0xCD]);
        let e = der_tlv(0x02, &[0x01, 0x00, 0x01]);
        let mut rsa_key_seq_content = n.clone();
        rsa_key_seq_content.extend_from_slice(&e);
        let rsa_key_seq = der_tlv(0x30, &rsa_key_seq_content);
        let mut bit_string_content = vec![0x00]; // 0 unused bits
        bit_string_content.extend_from_slice(&rsa_key_seq);
        let bit_string = der_tlv(0x03, &bit_string_content);

        let alg_oid = der_tlv(0x06, spki_algorithm::RSA_ENCRYPTION);
        let mut alg_id_content = alg_oid;
        alg_id_content.extend_from_slice(&der_tlv(0x05, &[])); // NULL parameters
        let alg_id = der_tlv(0x30, &alg_id_content);

        let mut spki_content = alg_id;
        spki_content.extend_from_slice(&bit_string);
        let spki_der = der_tlv(0x30, &spki_content);

        let (spki, rest) = parse_spki(&spki_der).unwrap();
        assert!(rest.is_empty());
        match spki.key {
            SpkiKey::Rsa { n, e } => {
                assert_eq!(n, &[0x00, 0xAB, 0xCD]);
                assert_eq!(e, &[0x01, 0x00, 0x01]);
            }
            _ => panic!("expected RSA key"),
        }
    }
}
