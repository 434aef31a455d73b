//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten, at most 2048 characters.
    #[validate(length(min = 1, max = 2048))]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// A created (or previously created) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    /// `false` when the URL had already been shortened.
    pub created: bool,
}
