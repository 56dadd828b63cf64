//! # Link Registry
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link entity, expiry rules, and repository traits
//! - **Application Layer** ([`application`]) - Link lifecycle service
//! - **Infrastructure Layer** ([`infrastructure`]) - Mutex-guarded in-memory registry
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Deterministic signed short codes, or caller-chosen aliases
//! - Click counting and last-use tracking
//! - Absolute TTL expiry plus inactivity expiry, purged lazily on resolve
//! - Rename (rekey) of existing links
//!
//! ## Quick Start
//!
//! ```bash
//! export SECRET_KEY="change-me"
//! export EXPIRATION_DAYS="30"   # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Link, LinkStats};
    pub use crate::domain::errors::RegistryError;
    pub use crate::domain::expiry::ExpiryPolicy;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::CodeGenerator;
}
