//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::Redirect,
};
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The hit counter is incremented before the redirect is returned, so a
/// subsequent stats request already reflects this visit.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.link_service.follow(&code).await?;

    debug!(code = %record.code, hits = record.hit_count, "Redirecting");

    Ok(Redirect::temporary(redirect_target(&record)))
}

/// Picks the `Location` value for a record.
///
/// `Location` only carries visible ASCII. Originals with non-ASCII text (an
/// IDN host, say) fall back to the normalized form, which the `url` crate
/// serializes as punycode and percent-encoding.
fn redirect_target(record: &UrlRecord) -> &str {
    if HeaderValue::from_str(&record.original_url).is_ok() {
        &record.original_url
    } else {
        &record.normalized_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewUrlRecord;

    #[test]
    fn test_redirect_target_prefers_original() {
        let record = UrlRecord::new(NewUrlRecord::new(
            "abc12345",
            "https://Example.com/Path",
            "https://example.com/Path",
        ));

        assert_eq!(redirect_target(&record), "https://Example.com/Path");
    }

    #[test]
    fn test_redirect_target_non_ascii_falls_back() {
        let record = UrlRecord::new(NewUrlRecord::new(
            "abc12345",
            "https://münchen.de/",
            "https://xn--mnchen-3ya.de/",
        ));

        assert_eq!(redirect_target(&record), "https://xn--mnchen-3ya.de/");
    }
}
