//! Expiry rules for links.
//!
//! Two independent checks decide whether a link may still be resolved:
//!
//! 1. **Absolute expiry** - `now > expires_at`, where `expires_at` was fixed at
//!    creation as `created_at + TTL`.
//! 2. **Inactivity expiry** - the whole number of days since `last_used`
//!    exceeds the TTL day count.
//!
//! The inactivity check only applies once a link has been resolved at least
//! once. A link that was never used is only caught by the absolute check, no
//! matter how old it is.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::Link;

/// Why a link stopped being resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryReason {
    /// Past its absolute `expires_at` deadline.
    Expired,
    /// Unused for longer than the TTL.
    Inactive,
}

/// TTL configuration shared by both expiry checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    ttl_days: i64,
}

impl ExpiryPolicy {
    pub fn new(ttl_days: i64) -> Self {
        Self { ttl_days }
    }

    pub fn ttl_days(&self) -> i64 {
        self.ttl_days
    }

    /// Absolute deadline for a link created at `created_at`.
    pub fn expires_at(&self, created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::days(self.ttl_days)
    }

    /// Evaluates both checks in order, absolute expiry first.
    ///
    /// Returns `None` when the link may be resolved at `now`.
    pub fn evaluate(&self, link: &Link, now: DateTime<Utc>) -> Option<ExpiryReason> {
        if link.expires_at.is_some_and(|deadline| now > deadline) {
            return Some(ExpiryReason::Expired);
        }

        if let Some(last_used) = link.last_used
            && (now - last_used).num_days() > self.ttl_days
        {
            return Some(ExpiryReason::Inactive);
        }

        None
    }
}
