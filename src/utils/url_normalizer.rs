//! URL normalization used as the deduplication key.
//!
//! Two submissions that differ only in scheme/host case or surrounding
//! whitespace normalize to the same string.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacter,
}

/// A submitted URL alongside its canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// The submitted URL with surrounding whitespace trimmed.
    pub original: String,
    /// The deduplication key.
    pub normalized: String,
}

/// Normalizes a URL to its canonical form.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Trimmed from both ends
/// 2. **Control characters**: Rejected anywhere inside the URL
/// 3. **Protocol**: Only HTTP and HTTPS are allowed; lowercased
/// 4. **Hostname**: Must be present; lowercased
/// 5. **Path, query, fragment**: Preserved with case sensitivity
///
/// Parsing goes through the `url` crate, so its canonical serialization
/// applies to the key: an empty path becomes `/`, default ports are dropped,
/// `.`/`..` segments are resolved and unsafe characters are percent-encoded.
/// The original spelling is kept separately in [`NormalizedUrl::original`].
///
/// The parser would silently strip embedded tabs and newlines, but the
/// original could then never be sent back in a `Location` header.
///
/// # Errors
///
/// Returns [`UrlNormalizationError`] when the input is empty, malformed, not
/// HTTP(S), or has no host.
///
/// # Examples
///
/// ```ignore
/// let url = normalize_url("  https://Example.com/Path?q=1 ").unwrap();
/// assert_eq!(url.original, "https://Example.com/Path?q=1");
/// assert_eq!(url.normalized, "https://example.com/Path?q=1");
/// ```
pub fn normalize_url(input: &str) -> Result<NormalizedUrl, UrlNormalizationError> {
    let original = input.trim();
    if original.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if original.chars().any(char::is_control) {
        return Err(UrlNormalizationError::ControlCharacter);
    }

    let url = Url::parse(original)
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlNormalizationError::MissingHost),
    }

    Ok(NormalizedUrl {
        original: original.to_string(),
        normalized: url.to_string(),
    })
}
