//! Link lifecycle service.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::clock::Clock;
use crate::domain::entities::{CodeSource, Link, LinkPatch, LinkStats, NewLink};
use crate::domain::errors::RegistryError;
use crate::domain::expiry::ExpiryPolicy;
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

/// Service for creating, resolving, and managing shortened links.
///
/// Picks the short code (caller alias or generated token), stamps times from the
/// injected [`Clock`], and delegates each lifecycle step to the repository as a
/// single atomic call.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    generator: CodeGenerator,
    policy: ExpiryPolicy,
    clock: Arc<dyn Clock>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<L>,
        generator: CodeGenerator,
        policy: ExpiryPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            link_repository,
            generator,
            policy,
            clock,
        }
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Creates a short link.
    ///
    /// `requested_expiry` is accepted for API compatibility but not honored:
    /// the deadline is always `now + TTL`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] if `original_url` is empty
    /// - [`RegistryError::AliasConflict`] if `custom_alias` is taken
    /// - [`RegistryError::CodeConflict`] if the generated code is taken
    pub async fn create_link(
        &self,
        original_url: String,
        custom_alias: Option<String>,
        requested_expiry: Option<DateTime<Utc>>,
    ) -> Result<Link, RegistryError> {
        if original_url.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "original_url must not be empty".to_string(),
            ));
        }

        if let Some(requested) = requested_expiry {
            debug!(%requested, "Ignoring caller-supplied expires_at; TTL applies");
        }

        let (code, source) = match custom_alias {
            Some(alias) => (alias, CodeSource::Alias),
            None => (self.generator.generate(&original_url), CodeSource::Generated),
        };

        let now = self.clock.now();
        let new_link = NewLink {
            code,
            source,
            original_url,
            created_at: now,
            expires_at: Some(self.policy.expires_at(now)),
        };

        let link = self.link_repository.create(new_link).await?;
        info!(code = %link.code, ?source, "Link created");

        Ok(link)
    }

    /// Resolves a short code to its link, recording the click.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is absent
    /// - [`RegistryError::Expired`] / [`RegistryError::InactivityExpired`] if the
    ///   link has lapsed; it is removed before the error is returned
    pub async fn resolve_link(&self, code: &str) -> Result<Link, RegistryError> {
        let now = self.clock.now();

        match self.link_repository.resolve(code, now, self.policy).await {
            Ok(link) => {
                debug!(code, clicks = link.click_count, "Link resolved");
                Ok(link)
            }
            Err(e @ (RegistryError::Expired { .. } | RegistryError::InactivityExpired { .. })) => {
                info!(code, reason = %e, "Link purged on resolve");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces a link's destination and optionally renames it.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] if `new_url` is empty
    /// - [`RegistryError::NotFound`] if `code` is absent
    /// - [`RegistryError::AliasConflict`] if `custom_alias` is taken
    pub async fn update_link(
        &self,
        code: &str,
        new_url: String,
        custom_alias: Option<String>,
    ) -> Result<Link, RegistryError> {
        if new_url.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "new_url must not be empty".to_string(),
            ));
        }

        let link = self
            .link_repository
            .update(
                code,
                LinkPatch {
                    new_url,
                    custom_alias,
                },
            )
            .await?;

        if link.code != code {
            info!(from = code, to = %link.code, "Link updated and rekeyed");
        } else {
            info!(code, "Link updated");
        }

        Ok(link)
    }

    /// Deletes a link regardless of its expiry state.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is absent.
    pub async fn delete_link(&self, code: &str) -> Result<(), RegistryError> {
        self.link_repository.delete(code).await?;
        info!(code, "Link deleted");
        Ok(())
    }

    /// Returns usage stats without checking expiry.
    ///
    /// A link visible here may still fail to resolve.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is absent.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, RegistryError> {
        let stats = self
            .link_repository
            .stats(code)
            .await
            .ok_or_else(|| RegistryError::not_found(code))?;

        debug!(code, clicks = stats.click_count, "Stats read");
        Ok(stats)
    }

    /// Number of links currently held, expired or not.
    pub async fn link_count(&self) -> usize {
        self.link_repository.count().await
    }
}
