//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_custom_alias;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "custom_alias": "ex",                   // optional
///   "expires_at": "2030-01-01T00:00:00Z"    // optional, ignored
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_code": "ex", "original_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the alias/code is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    if let Some(alias) = &payload.custom_alias {
        validate_custom_alias(alias)?;
    }

    let link = state
        .link_service
        .create_link(
            payload.original_url,
            payload.custom_alias,
            payload.expires_at,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.code,
            original_url: link.original_url,
        }),
    ))
}
