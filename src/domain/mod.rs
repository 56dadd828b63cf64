//! Domain layer containing business entities and lifecycle rules.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`expiry`] - Absolute and inactivity expiry rules
//! - [`clock`] - Injectable time source
//! - [`errors`] - Registry failure taxonomy
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//!
//! # Link Lifecycle
//!
//! 1. Created with `last_used = None`, `click_count = 0`, `expires_at = now + TTL`
//! 2. Each successful resolve bumps the click count and `last_used`
//! 3. Updates replace the URL and may move the link to a new key
//! 4. Removed by delete, or by a resolve that finds it expired

pub mod clock;
pub mod entities;
pub mod errors;
pub mod expiry;
pub mod repositories;
