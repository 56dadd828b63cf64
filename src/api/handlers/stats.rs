//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves usage statistics for a short link.
///
/// # Endpoint
///
/// `GET /links/{short_code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "click_count": 3,
///   "last_used": "2026-10-19T12:00:00Z",
///   "expires_at": "2026-11-18T12:00:00Z"
/// }
/// ```
///
/// This is a read-only view: no expiry check runs, so a link reported here
/// may still fail to resolve.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.get_stats(&code).await?;

    Ok(Json(stats.into()))
}
