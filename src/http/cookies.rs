//! Request cookie parsing and response cookie formatting.
//!
//! # Responsibilities
//! - Parse the `Cookie` request header into name/value pairs
//! - Format a `Set-Cookie` value with an expiry
//!
//! # Design Decisions
//! - Whitespace around names and values is trimmed (clients vary)
//! - Malformed pairs (no `=`) are skipped, not rejected
//! - No cookie lifecycle management beyond parse and format

use std::collections::HashMap;

use axum::http::{header, HeaderMap};

/// Parse all `Cookie` headers into a name → value map.
///
/// Later occurrences of the same name overwrite earlier ones.
pub fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    let mut cookies = HashMap::new();

    for header in headers.get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((name, value)) = pair.split_once('=') {
                cookies.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }

    cookies
}

/// Format a `Set-Cookie` header value with the given expiry.
///
/// Path and domain are left at their defaults.
pub fn set_cookie_value(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{}={}; Max-Age={}", name, value, max_age_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn test_parse_single_cookie() {
        let cookies = parse_cookies(&headers_with_cookie("name=petya"));
        assert_eq!(cookies.get("name").map(String::as_str), Some("petya"));
    }

    #[test]
    fn test_parse_multiple_cookies_with_whitespace() {
        let cookies = parse_cookies(&headers_with_cookie("name=petya; session= abc "));
        assert_eq!(cookies.get("name").map(String::as_str), Some("petya"));
        assert_eq!(cookies.get("session").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_malformed_pairs_are_skipped() {
        let cookies = parse_cookies(&headers_with_cookie("junk; name=petya"));
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies.get("name").map(String::as_str), Some("petya"));
    }

    #[test]
    fn test_no_cookie_header() {
        assert!(parse_cookies(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_set_cookie_format() {
        assert_eq!(set_cookie_value("foo", "bar", 1000), "foo=bar; Max-Age=1000");
    }
}
