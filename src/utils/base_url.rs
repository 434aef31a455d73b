//! Public base address resolution for composing short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the base address clients should use to reach this service.
///
/// A configured base URL always wins. Otherwise the base is built from the
/// request's own `Host` header (port included) and the scheme reported in
/// `X-Forwarded-Proto`, defaulting to `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing, not valid UTF-8, or not a bare authority.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// assert_eq!(resolve_base_url(None, &headers).unwrap(), "http://localhost:3000");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
        .trim();

    if host.is_empty() || host.contains(['/', ' ', '@', '?', '#']) {
        return Err(AppError::bad_request(
            "Invalid Host header",
            json!({ "host": host }),
        ));
    }

    let scheme = match headers.get(FORWARDED_PROTO).and_then(|v| v.to_str().ok()) {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    Ok(format!("{scheme}://{host}"))
}

/// Joins a base address and a code into the public short URL.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn host_headers(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_configured_base_wins() {
        let headers = host_headers("internal:3000");

        let result = resolve_base_url(Some("https://s.example.com/"), &headers);
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_base_from_host_keeps_port() {
        let headers = host_headers("localhost:3000");

        let result = resolve_base_url(None, &headers);
        assert_eq!(result.unwrap(), "http://localhost:3000");
    }

    #[test]
    fn test_base_from_host_ipv6() {
        let headers = host_headers("[::1]:8080");

        let result = resolve_base_url(None, &headers);
        assert_eq!(result.unwrap(), "http://[::1]:8080");
    }

    #[test]
    fn test_forwarded_proto_https() {
        let mut headers = host_headers("s.example.com");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("HTTPS"));

        let result = resolve_base_url(None, &headers);
        assert_eq!(result.unwrap(), "https://s.example.com");
    }

    #[test]
    fn test_unknown_forwarded_proto_falls_back_to_http() {
        let mut headers = host_headers("s.example.com");
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        let result = resolve_base_url(None, &headers);
        assert_eq!(result.unwrap(), "http://s.example.com");
    }

    #[test]
    fn test_missing_host_header() {
        let result = resolve_base_url(None, &HeaderMap::new());
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_host_with_path_rejected() {
        let headers = host_headers("evil.com/phish");

        let result = resolve_base_url(None, &headers);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_utf8_host() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE, 0xFD]) {
            headers.insert(header::HOST, value);

            assert!(resolve_base_url(None, &headers).is_err());
        }
    }

    #[test]
    fn test_short_url() {
        assert_eq!(short_url("http://localhost:3000", "abc"), "http://localhost:3000/abc");
        assert_eq!(short_url("https://s.io/", "abc"), "https://s.io/abc");
    }
}
