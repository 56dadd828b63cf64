//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom short code, used verbatim when free. Empty means unset.
    #[serde(default, deserialize_with = "super::empty_as_none")]
    pub custom_alias: Option<String>,

    /// Accepted for compatibility; the configured TTL always decides expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub original_url: String,
}
