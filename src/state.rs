//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::clock::Clock;
use crate::domain::expiry::ExpiryPolicy;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::utils::code_generator::CodeGenerator;

/// Link service wired to the in-memory registry.
pub type AppLinkService = LinkService<InMemoryLinkRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    /// Builds state around a fresh, empty registry.
    pub fn new(generator: CodeGenerator, policy: ExpiryPolicy, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(InMemoryLinkRepository::new());
        Self {
            link_service: Arc::new(LinkService::new(repository, generator, policy, clock)),
        }
    }
}
