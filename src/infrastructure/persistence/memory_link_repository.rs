//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::entities::{CodeSource, Link, LinkPatch, LinkStats, NewLink};
use crate::domain::errors::RegistryError;
use crate::domain::expiry::{ExpiryPolicy, ExpiryReason};
use crate::domain::repositories::LinkRepository;

/// Link registry held in a single mutex-guarded map.
///
/// Every operation locks the map once and runs its whole check-then-mutate
/// sequence under that lock, so concurrent calls are serialized. Nothing is
/// persisted; the registry starts empty on every process start.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, RegistryError> {
        let mut links = self.links.lock().await;

        if links.contains_key(&new_link.code) {
            return Err(match new_link.source {
                CodeSource::Alias => RegistryError::AliasConflict {
                    alias: new_link.code,
                },
                CodeSource::Generated => RegistryError::CodeConflict {
                    code: new_link.code,
                },
            });
        }

        let link = new_link.into_link();
        links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn resolve(
        &self,
        code: &str,
        now: DateTime<Utc>,
        policy: ExpiryPolicy,
    ) -> Result<Link, RegistryError> {
        let mut links = self.links.lock().await;

        let link = links
            .get_mut(code)
            .ok_or_else(|| RegistryError::not_found(code))?;

        if let Some(reason) = policy.evaluate(link, now) {
            links.remove(code);
            debug!(code, ?reason, "Purged expired link");

            return Err(match reason {
                ExpiryReason::Expired => RegistryError::Expired { code: code.into() },
                ExpiryReason::Inactive => RegistryError::InactivityExpired { code: code.into() },
            });
        }

        link.record_click(now);

        Ok(link.clone())
    }

    async fn update(&self, code: &str, patch: LinkPatch) -> Result<Link, RegistryError> {
        let mut links = self.links.lock().await;

        if !links.contains_key(code) {
            return Err(RegistryError::not_found(code));
        }

        if let Some(alias) = &patch.custom_alias
            && links.contains_key(alias)
        {
            return Err(RegistryError::AliasConflict {
                alias: alias.clone(),
            });
        }

        let mut link = links
            .remove(code)
            .ok_or_else(|| RegistryError::not_found(code))?;

        link.original_url = patch.new_url;
        if let Some(alias) = patch.custom_alias {
            link.code = alias;
        }

        links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn delete(&self, code: &str) -> Result<(), RegistryError> {
        self.links
            .lock()
            .await
            .remove(code)
            .map(|_| ())
            .ok_or_else(|| RegistryError::not_found(code))
    }

    async fn stats(&self, code: &str) -> Option<LinkStats> {
        self.links.lock().await.get(code).map(Link::stats)
    }

    async fn count(&self) -> usize {
        self.links.lock().await.len()
    }
}
