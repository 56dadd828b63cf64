//! Utility functions used across the application.
//!
//! - [`code_generator`] - Signed short code generation and alias validation

pub mod code_generator;
