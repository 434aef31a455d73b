//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_url};

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://Example.com/Path?q=1" }
/// ```
///
/// # Response
///
/// `201 Created` with a `Location` header for a new link, or `200 OK` when the
/// URL had already been shortened.
///
/// ```json
/// {
///   "code": "aZ3kP9qT",
///   "short_url": "http://localhost:3000/aZ3kP9qT",
///   "original_url": "https://Example.com/Path?q=1",
///   "created": true
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid or the public base address
/// cannot be determined.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let base = resolve_base_url(state.base_url.as_deref(), &headers)?;

    let shortened = state.link_service.shorten(&payload.url).await?;
    let record = shortened.record;
    let short_url = short_url(&base, &record.code);

    let status = if shortened.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let body = ShortenResponse {
        code: record.code,
        short_url: short_url.clone(),
        original_url: record.original_url,
        created: shortened.created,
    };

    Ok((status, [(header::LOCATION, short_url)], Json(body)))
}
