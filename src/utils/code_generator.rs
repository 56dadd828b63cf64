//! Short code generation and custom alias validation.
//!
//! Generated codes are compact HS256 signed tokens (`header.payload.signature`,
//! URL-safe base64 without padding) whose payload carries the original URL.
//! The same URL and secret always give the same code.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use regex::Regex;
use serde_json::json;
use sha2::Sha256;
use std::sync::LazyLock;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Token header; fixed for every code.
const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Maximum length of a custom alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would be shadowed by fixed routes or path normalization.
const RESERVED_ALIASES: &[&str] = &["shorten", ".", ".."];

/// Path-safe characters; generated tokens match this too.
static ALIAS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").unwrap());

/// Deterministic short code generator keyed by a signing secret.
#[derive(Clone)]
pub struct CodeGenerator {
    secret: String,
}

impl std::fmt::Debug for CodeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("secret", &"***")
            .finish()
    }
}

impl CodeGenerator {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Encodes `original_url` as a signed token.
    ///
    /// Never fails. The result is not guaranteed to be unique across URLs and
    /// must still go through the registry's uniqueness check.
    pub fn generate(&self, original_url: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(TOKEN_HEADER);
        let payload = URL_SAFE_NO_PAD.encode(json!({ "url": original_url }).to_string());
        let signing_input = format!("{header}.{payload}");

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(signing_input.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{signing_input}.{signature}")
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-`, `_`, `.`, `~`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Custom alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters, digits, '-', '_', '.' and '~'",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
