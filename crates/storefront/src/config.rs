//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>).
//!   An `https://` URL turns on secure session cookies.
//! - `CHECKOUT_ORDER_DELAY_MS` - Simulated order processing time (default: 2000)
//! - `CHECKOUT_SESSION_TTL_SECS` - Idle lifetime of a checkout (default: 1800)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_ORDER_DELAY_MS: &str = "2000";
const DEFAULT_SESSION_TTL_SECS: &str = "1800";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// How long a placed order stays in the processing state
    pub order_delay: Duration,
    /// How long an untouched checkout is kept before it is discarded
    pub session_ttl: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., "production")
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: DEFAULT_BASE_URL.to_string(),
            order_delay: Duration::from_millis(2000),
            session_ttl: Duration::from_secs(1800),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_host(
            "STOREFRONT_HOST",
            &get_env_or_default("STOREFRONT_HOST", DEFAULT_HOST),
        )?;
        let port = parse_port(
            "STOREFRONT_PORT",
            &get_env_or_default("STOREFRONT_PORT", DEFAULT_PORT),
        )?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", DEFAULT_BASE_URL);
        let order_delay = parse_millis(
            "CHECKOUT_ORDER_DELAY_MS",
            &get_env_or_default("CHECKOUT_ORDER_DELAY_MS", DEFAULT_ORDER_DELAY_MS),
        )?;
        let session_ttl = parse_secs(
            "CHECKOUT_SESSION_TTL_SECS",
            &get_env_or_default("CHECKOUT_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS),
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            order_delay,
            session_ttl,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

fn parse_host(key: &str, value: &str) -> Result<IpAddr, ConfigError> {
    value.parse::<IpAddr>().map_err(|e| invalid(key, e))
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| invalid(key, e))
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| invalid(key, e))
}

fn parse_secs(key: &str, value: &str) -> Result<Duration, ConfigError> {
    let secs = value.parse::<u64>().map_err(|e| invalid(key, e))?;
    if secs == 0 {
        return Err(invalid(key, "must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
