//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the lifecycle rules that act on them live
//! in [`crate::domain::expiry`] and the repository implementations.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with usage counters
//! - [`NewLink`] - Input for creating a link
//! - [`LinkPatch`] - Destination change with optional rekey
//! - [`LinkStats`] - Read-only usage snapshot

pub mod link;

pub use link::{CodeSource, Link, LinkPatch, LinkStats, NewLink};
