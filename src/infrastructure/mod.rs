//! Infrastructure layer implementing interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory link registry

pub mod persistence;
