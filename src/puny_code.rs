//! [RFC 3492](https://www.rfc-editor.org/rfc/rfc3492) Puny code.
//!
//! Used to render `dNSName` and `rfc822Name` GeneralName values for display;
//! certificate parsing never round-trips through this module.

/// Encode a UTF-8 DNS name into its ACE (`xn--`) form, label by label.
pub fn encode(dns_name_utf8: &str) -> String {
    let dns_name_punycode = dns_name_utf8
        .to_lowercase()
        .split('.')
        .map(|part| {
            if part.is_ascii() {
                part.to_string()
            } else {
                String::from("xn--") + idna::punycode::encode_str(part).unwrap().as_str()
            }
        })
        .collect::<Vec<_>>()
        .join(".");
    log::debug!("dns_name. input: {}, punycode: {}", &dns_name_utf8, &dns_name_punycode);
    dns_name_punycode
}

/// Decode an ACE-encoded DNS name back into UTF-8, label by label.
pub fn decode(dns_name_punycode: &str) -> String {
    let dns_name_utf8 = dns_name_punycode
        .to_lowercase()
        .split('.')
        .map(|part| {
            if part.starts_with("xn--") {
                idna::punycode::decode_to_string(part.split_at(4).1).unwrap()
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".");
    log::debug!("dns_name. punycode: {}, output: {}", &dns_name_punycode, &dns_name_utf8);
    dns_name_utf8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_logger;

    #[test]
    fn encdec_puny() {
        init_logger();
        let dns_name_utf8 = "übernice.fantastic.åäö";
        assert_eq!(dns_name_utf8, decode(&encode(dns_name_utf8)))
    }
}
