//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Invalid values abort startup instead of being coerced.
//!
//! ```bash
//! export SECRET_KEY="change-me"
//! export EXPIRATION_DAYS="30"
//! ```
//!
//! ## Required Variables
//!
//! - `SECRET_KEY` - Signing secret for generated short codes
//!
//! ## Optional Variables
//!
//! - `EXPIRATION_DAYS` - Link TTL in whole days (default: 30, range: 1-36500)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::expiry::ExpiryPolicy;
use crate::utils::code_generator::CodeGenerator;

/// TTL used when `EXPIRATION_DAYS` is unset.
pub const DEFAULT_EXPIRATION_DAYS: i64 = 30;

/// Upper bound on the TTL; keeps date arithmetic far from chrono's limits.
pub const MAX_EXPIRATION_DAYS: i64 = 36_500;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Days until a link's absolute expiry, and the inactivity window.
    pub expiration_days: i64,
    /// HMAC key for generated short codes. Loaded from `SECRET_KEY`.
    pub secret_key: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("expiration_days", &self.expiration_days)
            .field("secret_key", &"***")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SECRET_KEY` is missing or `EXPIRATION_DAYS` is not
    /// an integer.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let expiration_days = Self::load_expiration_days()?;

        let secret_key = env::var("SECRET_KEY").context("SECRET_KEY must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            expiration_days,
            secret_key,
        })
    }

    /// Parses `EXPIRATION_DAYS`, falling back to [`DEFAULT_EXPIRATION_DAYS`]
    /// only when the variable is unset.
    fn load_expiration_days() -> Result<i64> {
        match env::var("EXPIRATION_DAYS") {
            Ok(raw) => raw.trim().parse::<i64>().with_context(|| {
                format!("EXPIRATION_DAYS must be a whole number of days, got '{raw}'")
            }),
            Err(env::VarError::NotPresent) => Ok(DEFAULT_EXPIRATION_DAYS),
            Err(e) => Err(e).context("EXPIRATION_DAYS is not valid unicode"),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `expiration_days` is outside 1-36500
    /// - `secret_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EXPIRATION_DAYS).contains(&self.expiration_days) {
            anyhow::bail!(
                "EXPIRATION_DAYS must be between 1 and {}, got {}",
                MAX_EXPIRATION_DAYS,
                self.expiration_days
            );
        }

        if self.secret_key.is_empty() {
            anyhow::bail!("SECRET_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    pub fn expiry_policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::new(self.expiration_days)
    }

    pub fn code_generator(&self) -> CodeGenerator {
        CodeGenerator::new(self.secret_key.clone())
    }

    /// Prints configuration summary (without the secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Link TTL: {} days", self.expiration_days);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            expiration_days: 30,
            secret_key: "test-secret".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.expiration_days = 0;
        assert!(config.validate().is_err());

        config.expiration_days = MAX_EXPIRATION_DAYS + 1;
        assert!(config.validate().is_err());

        config.expiration_days = 30;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.secret_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_masks_secret() {
        let rendered = format!("{:?}", valid_config());
        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_expiry_policy_from_config() {
        assert_eq!(valid_config().expiry_policy().ttl_days(), 30);
    }

    #[test]
    #[serial]
    fn test_expiration_days_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("EXPIRATION_DAYS");
        }

        assert_eq!(
            Config::load_expiration_days().unwrap(),
            DEFAULT_EXPIRATION_DAYS
        );
    }

    #[test]
    #[serial]
    fn test_expiration_days_parsed() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("EXPIRATION_DAYS", " 7 ");
        }

        assert_eq!(Config::load_expiration_days().unwrap(), 7);

        unsafe {
            env::remove_var("EXPIRATION_DAYS");
        }
    }

    #[test]
    #[serial]
    fn test_expiration_days_rejects_text() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("EXPIRATION_DAYS", "Days_before_link_deleting");
        }

        let err = Config::load_expiration_days().unwrap_err();
        assert!(err.to_string().contains("EXPIRATION_DAYS"));

        unsafe {
            env::remove_var("EXPIRATION_DAYS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("SECRET_KEY");
            env::remove_var("EXPIRATION_DAYS");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("SECRET_KEY", "from-env");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.secret_key, "from-env");
        assert_eq!(config.expiration_days, DEFAULT_EXPIRATION_DAYS);

        unsafe {
            env::remove_var("SECRET_KEY");
        }
    }
}
