//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with usage metadata.
///
/// Represents the mapping between a short code and an original URL. `code` is the
/// registry key; it only changes when the link is rekeyed by an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub last_used: Option<DateTime<Utc>>,
    pub click_count: u64,
}

impl Link {
    /// Creates a fresh, never-resolved link.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            last_used: None,
            click_count: 0,
        }
    }

    /// Records a successful resolution at `now`.
    ///
    /// `now` is read before the registry lock is taken, so resolves may commit
    /// out of order; `last_used` keeps the latest stamp seen.
    pub fn record_click(&mut self, now: DateTime<Utc>) {
        self.last_used = Some(self.last_used.map_or(now, |prev| prev.max(now)));
        self.click_count += 1;
    }

    /// Returns a read-only snapshot of the usage counters.
    pub fn stats(&self) -> LinkStats {
        LinkStats {
            original_url: self.original_url.clone(),
            click_count: self.click_count,
            last_used: self.last_used,
            expires_at: self.expires_at,
        }
    }
}

/// Where a new link's short code came from.
///
/// Both sources go through the same uniqueness check, but a taken alias and a
/// taken generated code are reported as different conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSource {
    Alias,
    Generated,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub source: CodeSource,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl NewLink {
    pub fn into_link(self) -> Link {
        Link::new(
            self.code,
            self.original_url,
            self.created_at,
            self.expires_at,
        )
    }
}

/// Update for an existing link.
///
/// `new_url` always replaces the destination. When `custom_alias` is set the
/// record is moved to that key.
#[derive(Debug, Clone)]
pub struct LinkPatch {
    pub new_url: String,
    pub custom_alias: Option<String>,
}

/// Usage snapshot returned by the stats read path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub original_url: String,
    pub click_count: u64,
    pub last_used: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            Some(now + Duration::days(30)),
        );

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert!(link.last_used.is_none());
        assert_eq!(link.click_count, 0);
    }

    #[test]
    fn test_record_click() {
        let now = Utc::now();
        let mut link = Link::new("c".to_string(), "https://example.com".to_string(), now, None);

        link.record_click(now + Duration::seconds(5));
        link.record_click(now + Duration::seconds(10));

        assert_eq!(link.click_count, 2);
        assert_eq!(link.last_used, Some(now + Duration::seconds(10)));
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_record_click_out_of_order_keeps_latest() {
        let now = Utc::now();
        let mut link = Link::new("c".to_string(), "https://example.com".to_string(), now, None);

        link.record_click(now + Duration::seconds(10));
        link.record_click(now + Duration::seconds(5));

        assert_eq!(link.click_count, 2);
        assert_eq!(link.last_used, Some(now + Duration::seconds(10)));
    }

    #[test]
    fn test_stats_snapshot() {
        let now = Utc::now();
        let mut link = Link::new(
            "c".to_string(),
            "https://example.com".to_string(),
            now,
            Some(now + Duration::days(1)),
        );
        link.record_click(now);

        let stats = link.stats();
        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.click_count, 1);
        assert_eq!(stats.last_used, Some(now));
        assert_eq!(stats.expires_at, Some(now + Duration::days(1)));
    }

    #[test]
    fn test_new_link_into_link() {
        let now = Utc::now();
        let new_link = NewLink {
            code: "xyz789".to_string(),
            source: CodeSource::Alias,
            original_url: "https://rust-lang.org".to_string(),
            created_at: now,
            expires_at: None,
        };

        let link = new_link.into_link();
        assert_eq!(link.code, "xyz789");
        assert_eq!(link.original_url, "https://rust-lang.org");
        assert_eq!(link.click_count, 0);
        assert!(link.last_used.is_none());
    }
}
