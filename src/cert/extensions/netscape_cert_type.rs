//! Netscape Certificate Type extension (2.16.840.1.113730.1.1).
//!
//! Not a standards-track RFC 5280 extension, but still common enough in
//! older CA output to be worth decoding. Encoded the same way as
//! [crate::cert::extensions::key_usage] — a BIT STRING bitmap, MSB first.

use crate::cert::parse::parsing_error::ParsingError;
use crate::der::decode_bit_string;

/// Netscape Certificate Type object identifier, DER content octets.
pub const OID: &[u8] = crate::oid::extension::NETSCAPE_CERT_TYPE;

/// The subset of Netscape Certificate Type bits this crate's test scenarios
/// exercise: client/server TLS usage and CA delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetscapeCertType {
    /// Bit 0: certificate is usable as a TLS client certificate.
    pub ssl_client: bool,
    /// Bit 1: certificate is usable as a TLS server certificate.
    pub ssl_server: bool,
    /// Bit 5: certificate is a CA for TLS server certificates.
    pub ssl_ca: bool,
}

/// Decode the extension value octets (the NetscapeCertType BIT STRING).
pub fn parse_netscape_cert_type(content: &[u8]) -> Result<NetscapeCertType, ParsingError> {
    let bit_string = decode_bit_string(content)?;
    Ok(NetscapeCertType {
        ssl_client: bit_string.bit(0),
        ssl_server: bit_string.bit(1),
        ssl_ca: bit_string.bit(5),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ssl_server_and_ca_bits() {
        // bits 1 (sslServer) and 5 (sslCA) set: 0100_0100, 0 unused bits.
        let der = [0x00, 0b0100_0100];
        let nct = parse_netscape_cert_type(&der).unwrap();
        assert!(nct.ssl_server);
        assert!(nct.ssl_ca);
        assert!(!nct.ssl_client);
    }
}
