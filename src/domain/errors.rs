//! Failure taxonomy for link registry operations.

use thiserror::Error;

/// Errors produced by the link registry.
///
/// Conflicts are client errors; the remaining lookup failures all read as
/// "not found" to HTTP callers and differ only in their message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Custom alias already exists.")]
    AliasConflict { alias: String },

    #[error("Short code already exists.")]
    CodeConflict { code: String },

    #[error("Link not found")]
    NotFound { code: String },

    #[error("Link has expired")]
    Expired { code: String },

    #[error("Link has been deleted due to inactivity")]
    InactivityExpired { code: String },

    #[error("{0}")]
    InvalidInput(String),
}

impl RegistryError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}
