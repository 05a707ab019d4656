//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MARKET_API_BASE_URL` - Base URL of the marketplace backend (e.g.,
//!   `https://api.mangomarket.app`)
//!
//! ## Optional
//! - `MARKET_API_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//! - `MARKET_SESSION_FILE` - Path of the persisted session file (default:
//!   `$HOME/.config/mango-market/session.json`, or
//!   `.mango-market-session.json` in the working directory when `HOME` is
//!   unset)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace backend.
    pub base_url: Url,
    /// Request timeout applied to every call. There are no per-request
    /// overrides and no retries.
    pub timeout: Duration,
    /// Path of the persisted session file.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MARKET_API_BASE_URL` is missing or does not
    /// parse as a URL, or if `MARKET_API_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("MARKET_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MARKET_API_BASE_URL".to_owned(), e.to_string())
            })?;

        let timeout_secs = get_env_or_default(
            "MARKET_API_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("MARKET_API_TIMEOUT_SECS".to_owned(), e.to_string())
        })?;

        let session_file = std::env::var("MARKET_SESSION_FILE")
            .map_or_else(|_| default_session_file(), PathBuf::from);

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Build a configuration directly (tests and embedding callers).
    #[must_use]
    pub const fn new(base_url: Url, timeout: Duration, session_file: PathBuf) -> Self {
        Self {
            base_url,
            timeout,
            session_file,
        }
    }
}

/// Default session file path under the user's config directory.
fn default_session_file() -> PathBuf {
    std::env::var("HOME").map_or_else(
        |_| PathBuf::from(".mango-market-session.json"),
        |home| {
            let mut path = PathBuf::from(home);
            path.push(".config");
            path.push("mango-market");
            path.push("session.json");
            path
        },
    )
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = ClientConfig::new(
            "https://api.example.com".parse().unwrap(),
            Duration::from_secs(5),
            PathBuf::from("/tmp/session.json"),
        );
        assert_eq!(config.base_url.as_str(), "https://api.example.com/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_session_file_shape() {
        let path = default_session_file();
        assert!(path.to_string_lossy().ends_with("session.json"));
    }
}
