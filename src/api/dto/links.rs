//! DTOs for resolve, update, and delete endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Response for `GET /links/{short_code}`.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub original_url: String,
}

/// Request body for `PUT /links/{short_code}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    /// New destination URL for this link.
    #[validate(url(message = "Invalid URL format"))]
    pub new_url: String,

    /// When set and non-empty, the link is moved to this short code.
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub custom_alias: Option<String>,
}

/// Response for `PUT /links/{short_code}`.
#[derive(Debug, Serialize)]
pub struct UpdateLinkResponse {
    pub detail: String,
    pub new_url: String,
}

/// Response for `DELETE /links/{short_code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub detail: String,
}
