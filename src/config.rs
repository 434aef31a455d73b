//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags (see `main.rs`) may override individual values.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BASE_URL` - Public base for short URLs, e.g. `https://s.example.com`.
//!   When unset, the base is derived from each request's `Host` header.
//! - `CODE_LENGTH` - Length of generated codes (default: 8, range: 6-32)

use anyhow::{Context, Result};
use std::env;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

pub const MIN_CODE_LENGTH: usize = 6;
pub const MAX_CODE_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Public base for composing short URLs. `None` means "use the Host header".
    pub base_url: Option<String>,
    pub code_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            base_url: None,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CODE_LENGTH` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let code_length = match env::var("CODE_LENGTH") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("CODE_LENGTH must be a number, got '{v}'"))?,
            Err(_) => defaults.code_length,
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            base_url,
            code_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `base_url` is not an absolute HTTP(S) URL
    /// - `code_length` is outside the allowed range
    pub fn validate(&self) -> Result<()> {
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

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between {} and {}, got {}",
                MIN_CODE_LENGTH,
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: from Host header"),
        }
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
