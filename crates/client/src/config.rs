//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BOOKMARKET_ORIGIN` - Origin the API base path is resolved against (default: `http://localhost:8080`)
//! - `BOOKMARKET_API_BASE_URL` - API base path or absolute URL (default: `/api`)
//! - `BOOKMARKET_SUCCESS_CODES` - Comma-separated envelope codes treated as success (default: `200,0`)
//! - `BOOKMARKET_SESSION_FILE` - File the session token is persisted in (default: `.bookmarket/session.json`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::http::SuccessCodes;

/// Default origin for a locally running backend.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

/// Default API base path, relative to the origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Default location of the persisted session.
pub const DEFAULT_SESSION_FILE: &str = ".bookmarket/session.json";

/// Every request fails with a network error after this long.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid API base URL {0}: {1}")]
    InvalidBaseUrl(String, url::ParseError),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend
    pub origin: Url,
    /// Base path (or absolute URL) every API path is appended to
    pub api_base: String,
    /// Envelope codes that mean success
    pub success_codes: SuccessCodes,
    /// Where the file-backed session storage lives
    pub session_file: PathBuf,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with defaults for everything except the origin.
    #[must_use]
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            api_base: DEFAULT_API_BASE.to_owned(),
            success_codes: SuccessCodes::default(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let origin_raw = get_env_or_default("BOOKMARKET_ORIGIN", DEFAULT_ORIGIN);
        let origin = Url::parse(&origin_raw).map_err(|e| {
            ConfigError::InvalidEnvVar("BOOKMARKET_ORIGIN".to_string(), e.to_string())
        })?;

        let success_codes = get_env_or_default("BOOKMARKET_SUCCESS_CODES", "200,0")
            .parse::<SuccessCodes>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BOOKMARKET_SUCCESS_CODES".to_string(), e.to_string())
            })?;

        let config = Self {
            origin,
            api_base: get_env_or_default("BOOKMARKET_API_BASE_URL", DEFAULT_API_BASE),
            success_codes,
            session_file: PathBuf::from(get_env_or_default(
                "BOOKMARKET_SESSION_FILE",
                DEFAULT_SESSION_FILE,
            )),
            timeout: REQUEST_TIMEOUT,
        };

        // Fail early on a base URL that cannot be resolved
        config.base_url()?;
        Ok(config)
    }

    /// Resolve the API base URL.
    ///
    /// A relative `api_base` is resolved against `origin`; an absolute one
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the result is not a valid URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        self.origin
            .join(&self.api_base)
            .map_err(|e| ConfigError::InvalidBaseUrl(self.api_base.clone(), e))
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
