//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Usage statistics for a specific short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub click_count: u64,
    pub last_used: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            original_url: stats.original_url,
            click_count: stats.click_count,
            last_used: stats.last_used,
            expires_at: stats.expires_at,
        }
    }
}
