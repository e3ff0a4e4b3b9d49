//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MOONBASE_BACKEND_URL` - Base URL of the Moon Cookies backend
//!   (default: `http://localhost:1111`)

use thiserror::Error;
use url::Url;

/// Default backend address, matching the backend's development port.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:1111";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Connection settings for the backend.
///
/// Deliberately carries no request timeout: an in-flight call always
/// completes or fails before local state is updated, and there is no abort
/// path.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend.
    pub base_url: Url,
}

impl ClientConfig {
    /// Create a configuration pointing at `base_url`.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `MOONBASE_BACKEND_URL` is set but is not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("MOONBASE_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let base_url = Url::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("MOONBASE_BACKEND_URL".to_string(), e.to_string())
        })?;

        Ok(Self { base_url })
    }
}
