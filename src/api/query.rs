//! Query string parsing module
//!
//! hyper exposes the raw query string; parameters are split and
//! percent-decoded here.

use std::collections::HashMap;

/// Parse a raw query string into a key-value map.
///
/// Later duplicates win. A key without '=' maps to the empty string. '+'
/// decodes to a space and "%XX" to its byte; malformed escapes are kept
/// literally.
pub fn parse(raw: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let Some(raw) = raw else {
        return params;
    };

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        params.insert(decode(key), decode(value));
    }
    params
}

/// Retrieve a parameter that is present and non-empty.
pub fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let params = parse(Some("city=london&symbol=AAPL"));
        assert_eq!(params.get("city").map(String::as_str), Some("london"));
        assert_eq!(params.get("symbol").map(String::as_str), Some("AAPL"));
    }

    #[test]
    fn test_parse_percent_and_plus_decoding() {
        let params = parse(Some("city=new+york&q=caf%C3%A9%20au%20lait"));
        assert_eq!(params.get("city").map(String::as_str), Some("new york"));
        assert_eq!(params.get("q").map(String::as_str), Some("café au lait"));
    }

    #[test]
    fn test_parse_malformed_escape_kept_literally() {
        let params = parse(Some("q=100%zz&r=50%"));
        assert_eq!(params.get("q").map(String::as_str), Some("100%zz"));
        assert_eq!(params.get("r").map(String::as_str), Some("50%"));
    }

    #[test]
    fn test_parse_missing_and_empty() {
        assert!(parse(None).is_empty());
        assert!(parse(Some("")).is_empty());

        let params = parse(Some("city=&flag"));
        assert_eq!(params.get("city").map(String::as_str), Some(""));
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn test_non_empty_rejects_empty_values() {
        let params = parse(Some("city=&symbol=GOOG"));
        assert_eq!(non_empty(&params, "city"), None);
        assert_eq!(non_empty(&params, "missing"), None);
        assert_eq!(non_empty(&params, "symbol"), Some("GOOG"));
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let params = parse(Some("city=london&city=tokyo"));
        assert_eq!(params.get("city").map(String::as_str), Some("tokyo"));
    }
}
