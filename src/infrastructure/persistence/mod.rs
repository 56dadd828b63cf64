//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Mutex-guarded in-process link registry

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
