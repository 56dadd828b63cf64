//! CLI administration tool for link-registry.
//!
//! Offline helpers that share the server's configuration and code rules,
//! so operators can check a deployment without sending HTTP requests.
//!
//! # Usage
//!
//! ```bash
//! # Validate the environment the server would start with
//! cargo run --bin admin -- config check
//!
//! # Show the short code generated for a URL
//! cargo run --bin admin -- code "https://example.com"
//!
//! # Check whether an alias is acceptable
//! cargo run --bin admin -- alias check my-link
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `SECRET_KEY` (required), `EXPIRATION_DAYS`, `LISTEN`,
//! `LOG_FORMAT`. A `.env` file is honored.

use link_registry::config::{self, Config};
use link_registry::utils::code_generator::{CodeGenerator, validate_custom_alias};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for link-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the short code generated for a URL
    Code {
        /// Original URL
        url: String,

        /// Override SECRET_KEY for this run
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Custom alias operations
    Alias {
        #[command(subcommand)]
        action: AliasAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate configuration from the environment
    Check,
}

/// Alias subcommands.
#[derive(Subcommand)]
enum AliasAction {
    /// Validate a custom alias against the API rules
    Check {
        /// Alias to check
        alias: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Check => check_config()?,
        },
        Commands::Code { url, secret } => print_code(&url, secret)?,
        Commands::Alias { action } => match action {
            AliasAction::Check { alias } => check_alias(&alias)?,
        },
    }

    Ok(())
}

/// Loads configuration exactly as the server does and prints a summary.
fn check_config() -> Result<()> {
    println!("{}", "Configuration check".bright_blue().bold());
    println!();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("  {} {:#}", "INVALID".red().bold(), e);
            println!();
            return Err(e);
        }
    };

    print_config(&config);
    println!();
    println!("{}", "Configuration is valid".green().bold());

    Ok(())
}

fn print_config(config: &Config) {
    println!("  {:<16} {}", "Listen:".bright_white(), config.listen_addr.cyan());
    println!(
        "  {:<16} {}",
        "Link TTL:".bright_white(),
        format!("{} days", config.expiration_days).cyan()
    );
    println!("  {:<16} {}", "Log format:".bright_white(), config.log_format.cyan());
    println!(
        "  {:<16} {}",
        "Secret:".bright_white(),
        format!("set ({} bytes)", config.secret_key.len()).bright_black()
    );
}

/// Prints the deterministic code the service would assign to `url`.
fn print_code(url: &str, secret: Option<String>) -> Result<()> {
    let generator = match secret {
        Some(secret) => CodeGenerator::new(secret),
        None => config::load_from_env()
            .context("Pass --secret or configure SECRET_KEY")?
            .code_generator(),
    };

    let code = generator.generate(url);

    println!("{}", "Generated short code".bright_blue().bold());
    println!();
    println!("  URL:  {}", url.cyan());
    println!("  Code: {}", code.bright_yellow().bold());
    println!();
    println!(
        "  {}",
        "Creating this URL twice without an alias fails with 'Short code already exists.'"
            .bright_black()
    );

    Ok(())
}

fn check_alias(alias: &str) -> Result<()> {
    match validate_custom_alias(alias) {
        Ok(()) => {
            println!("{} {}", "VALID".green().bold(), alias.cyan());
            Ok(())
        }
        Err(e) => {
            println!("{} {}: {}", "INVALID".red().bold(), alias.cyan(), e);
            anyhow::bail!("alias '{}' is not acceptable", alias)
        }
    }
}
