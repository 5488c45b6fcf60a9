//! X.509 Key Usage extension.
//!
//! See [RFC5280 4.2.1.3](https://www.rfc-editor.org/rfc/rfc5280.html#section-4.2.1.3).

use crate::cert::parse::parsing_error::ParsingError;
use crate::der::decode_bit_string;

/// A single Key Usage purpose bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyUsage {
    /// Allow use for verifying digital signatures, other than signatures on
    /// certificates and CRLs.
    DigitalSignature,
    /// A.k.a. `contentCommitment`.
    NonRepudiation,
    /// Allow enciphering private or secret keys.
    KeyEncipherment,
    /// Allow direct enciphering of data without an intermediate symmetric cipher.
    DataEncipherment,
    /// Allow use in key agreement.
    KeyAgreement,
    /// Allow verification of public key certificates.
    KeyCertSign,
    /// Allow verification of certificate revocation lists.
    CrlSign,
    /// Only allow enciphering data during key agreement. Requires [Self::KeyAgreement].
    EncipherOnly,
    /// Only allow deciphering data during key agreement. Requires [Self::KeyAgreement].
    DecipherOnly,
}

impl KeyUsage {
    // joint-iso-ccitt(2) ds(5) id-ce(29) id-ce-keyUsage(15)
    /// Key Usage object identifier, DER content octets.
    pub const OID: &'static [u8] = crate::oid::extension::KEY_USAGE;

    const MSB_ORDERED: [Self; 9] = [
        Self::DigitalSignature,
        Self::NonRepudiation,
        Self::KeyEncipherment,
        Self::DataEncipherment,
        Self::KeyAgreement,
        Self::KeyCertSign,
        Self::CrlSign,
        Self::EncipherOnly,
        Self::DecipherOnly,
    ];

    /// The bit position this usage occupies in the KeyUsage BIT STRING,
    /// 0 being the most significant bit (`digitalSignature`).
    pub fn index(&self) -> usize {
        Self::MSB_ORDERED.iter().position(|ku| ku == self).unwrap()
    }
}

/// The decoded KeyUsage BIT STRING, queried one flag at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUsageFlags([bool; 9]);

impl KeyUsageFlags {
    /// Whether `usage` is asserted.
    pub fn is_set(&self, usage: KeyUsage) -> bool {
        self.0[usage.index()]
    }
}

/// Decode the extension value octets (the KeyUsage BIT STRING).
pub fn parse_key_usage(content: &[u8]) -> Result<KeyUsageFlags, ParsingError> {
    let bit_string = decode_bit_string(content)?;
    let mut flags = [false; 9];
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = bit_string.bit(i);
    }
    Ok(KeyUsageFlags(flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_digital_signature_and_key_cert_sign() {
        // bit 0 (digitalSignature) and bit 5 (keyCertSign) set, 2 unused bits.
        let der = [0x02, 0b1000_0100];
        let flags = parse_key_usage(&der).unwrap();
        assert!(flags.is_set(KeyUsage::DigitalSignature));
        assert!(flags.is_set(KeyUsage::KeyCertSign));
        assert!(!flags.is_set(KeyUsage::NonRepudiation));
        assert!(!flags.is_set(KeyUsage::DecipherOnly));
    }
}
