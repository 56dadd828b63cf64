//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPatch, LinkStats, NewLink};
use crate::domain::errors::RegistryError;
use crate::domain::expiry::ExpiryPolicy;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the link registry.
///
/// Every method is one atomic transaction: the checks and the mutation it
/// performs cannot interleave with another call on the same repository.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - mutex-guarded map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link under `new_link.code`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AliasConflict`] if the code is a caller alias that
    /// is already taken, or [`RegistryError::CodeConflict`] if it is a generated
    /// code that is already taken. The registry is unchanged on failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, RegistryError>;

    /// Resolves a code at `now`, purging it if `policy` says it has expired.
    ///
    /// On success the link's `last_used` is set to `now` and its click count is
    /// incremented; the updated link is returned.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is absent
    /// - [`RegistryError::Expired`] if past the absolute deadline (link removed)
    /// - [`RegistryError::InactivityExpired`] if unused for too long (link removed)
    async fn resolve(
        &self,
        code: &str,
        now: DateTime<Utc>,
        policy: ExpiryPolicy,
    ) -> Result<Link, RegistryError>;

    /// Replaces the destination URL and optionally moves the link to a new key.
    ///
    /// Usage counters and timestamps are left untouched.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if `code` is absent
    /// - [`RegistryError::AliasConflict`] if the new alias is already a key
    async fn update(&self, code: &str, patch: LinkPatch) -> Result<Link, RegistryError>;

    /// Removes a link without any expiry check.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is absent.
    async fn delete(&self, code: &str) -> Result<(), RegistryError>;

    /// Reads a usage snapshot without expiry checks or mutation.
    ///
    /// # Returns
    ///
    /// - `Some(LinkStats)` if the code is present, even if it would no longer resolve
    /// - `None` if absent
    async fn stats(&self, code: &str) -> Option<LinkStats>;

    /// Number of stored links, including expired ones not yet purged.
    async fn count(&self) -> usize;
}
