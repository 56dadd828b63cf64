//! Handlers for link resolution and management (resolve, update, delete).

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::links::{
    DeleteLinkResponse, ResolveResponse, UpdateLinkRequest, UpdateLinkResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::validate_custom_alias;

/// Resolves a short code to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /links/{short_code}`
///
/// # Expiry
///
/// A link past its absolute deadline, or unused for longer than the TTL, is
/// removed by this call and reported as not found.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, expired, or inactive. The
/// message tells the three cases apart.
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let link = state.link_service.resolve_link(&code).await?;

    Ok(Json(ResolveResponse {
        original_url: link.original_url,
    }))
}

/// Replaces a link's destination and optionally renames it.
///
/// # Endpoint
///
/// `PUT /links/{short_code}`
///
/// # Request Body
///
/// ```json
/// {
///   "new_url": "https://new-destination.com",
///   "custom_alias": "renamed"   // optional; the old code stops resolving
/// }
/// ```
///
/// Click count, timestamps, and expiry are carried over unchanged.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
/// Returns 400 Bad Request if validation fails or the new alias is taken.
pub async fn update_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<UpdateLinkResponse>, AppError> {
    payload.validate()?;

    if let Some(alias) = &payload.custom_alias {
        validate_custom_alias(alias)?;
    }

    let link = state
        .link_service
        .update_link(&code, payload.new_url, payload.custom_alias)
        .await?;

    Ok(Json(UpdateLinkResponse {
        detail: "Link updated successfully".to_string(),
        new_url: link.original_url,
    }))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /links/{short_code}`
///
/// The link is removed even if it has already lapsed but was never purged.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse {
        detail: "Link deleted successfully".to_string(),
    }))
}
