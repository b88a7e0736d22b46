//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file), then shared read-only for the process lifetime.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use tracing::info;

/// Environment variable holding the Waitlister API key.
pub const API_KEY_VAR: &str = "WAITLISTER_API_KEY";

/// Environment variable holding the waitlist key.
pub const WAITLIST_KEY_VAR: &str = "WAITLISTER_WAITLIST_KEY";

/// Environment variable overriding the Waitlister base URL.
pub const BASE_URL_VAR: &str = "WAITLISTER_BASE_URL";

/// Default Waitlister API host.
pub const DEFAULT_BASE_URL: &str = "https://waitlister.me";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Waitlister API configuration.
    pub waitlister: WaitlisterConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Waitlister API configuration.
#[derive(Debug, Clone)]
pub struct WaitlisterConfig {
    /// Scheme and host of the Waitlister API, without the `/api/v1` prefix.
    pub base_url: String,

    /// API credentials.
    pub credentials: CredentialsConfig,
}

/// Waitlister credentials. Both values are required.
#[derive(Clone)]
pub struct CredentialsConfig {
    /// API key sent in the `X-Api-Key` header.
    pub api_key: String,

    /// Key of the waitlist every call is scoped to.
    pub waitlist_key: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key", &"[REDACTED]")
            .field("waitlist_key", &"[REDACTED]")
            .finish()
    }
}

impl CredentialsConfig {
    /// Create credentials from an API key and a waitlist key.
    pub fn new(api_key: impl Into<String>, waitlist_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            waitlist_key: waitlist_key.into(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "waitlister-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Read the log level from `MCP_LOG_LEVEL`.
    ///
    /// Kept separate from [`Config::from_env`] so logging can be initialized
    /// before credentials are validated.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        logging
    }
}

impl WaitlisterConfig {
    /// Create a Waitlister configuration pointing at the default host.
    pub fn new(credentials: CredentialsConfig) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
        }
    }
}

impl Config {
    /// Create a configuration with default values and the given credentials.
    pub fn new(credentials: CredentialsConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            waitlister: WaitlisterConfig::new(credentials),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Fails if either credential is missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let credentials = CredentialsConfig {
            api_key: required_var(API_KEY_VAR)?,
            waitlist_key: required_var(WAITLIST_KEY_VAR)?,
        };

        let mut config = Self::new(credentials);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            info!("Waitlister base URL overridden: {}", base_url);
            config.waitlister.base_url = base_url;
        }

        Ok(config)
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!(
            "{} environment variable is required",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var(WAITLIST_KEY_VAR);
            std::env::remove_var(BASE_URL_VAR);
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "test_key_12345");
            std::env::set_var(WAITLIST_KEY_VAR, "my-waitlist");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.waitlister.credentials.api_key, "test_key_12345");
        assert_eq!(config.waitlister.credentials.waitlist_key, "my-waitlist");
        assert_eq!(config.waitlister.base_url, DEFAULT_BASE_URL);
        clear_env();
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(WAITLIST_KEY_VAR, "my-waitlist");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
        clear_env();
    }

    #[test]
    fn test_empty_waitlist_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "test_key_12345");
            std::env::set_var(WAITLIST_KEY_VAR, "");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(WAITLIST_KEY_VAR));
        clear_env();
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "k");
            std::env::set_var(WAITLIST_KEY_VAR, "w");
            std::env::set_var(BASE_URL_VAR, "http://127.0.0.1:9999");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.waitlister.base_url, "http://127.0.0.1:9999");
        clear_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig::new("super_secret_key", "secret_waitlist");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(!debug_str.contains("secret_waitlist"));
    }
}
