//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) or defaults. The
//! resulting [`Config`] is built once at startup and passed explicitly to the
//! server and the AnythingLLM client; nothing reads the environment afterwards.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default AnythingLLM instance address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// AnythingLLM API endpoint and credentials.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Connection settings for the AnythingLLM REST API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the AnythingLLM instance, without trailing slash.
    pub base_url: String,

    /// Bearer API key. May be empty at startup; every request checks it.
    pub api_key: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "[EMPTY]"
                } else {
                    "[REDACTED]"
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Build an API configuration, normalizing the base URL.
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Whether a usable API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, String::new())
    }
}

/// Strip trailing slashes so paths can be appended verbatim.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "anythingllm-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`), the API connection uses the
    /// `ANYTHINGLLM_` prefix (`ANYTHINGLLM_BASE_URL`, `ANYTHINGLLM_API_KEY`,
    /// `ANYTHINGLLM_TIMEOUT_SECS`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();
        config.transport = TransportConfig::from_env();
        config.api = ApiConfig::from_env();

        config
    }
}

impl LoggingConfig {
    /// Load logging settings from `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Read separately from the rest of the config so the subscriber can be
    /// installed before anything else logs.
    pub fn from_env() -> Self {
        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            with_timestamps: std::env::var("MCP_LOG_TIMESTAMPS")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

impl ApiConfig {
    /// Load the AnythingLLM connection settings from the environment.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ANYTHINGLLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("ANYTHINGLLM_API_KEY").unwrap_or_default();

        let mut api = Self::new(base_url, api_key);

        if let Ok(raw) = std::env::var("ANYTHINGLLM_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => api.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid ANYTHINGLLM_TIMEOUT_SECS '{}', using {}s",
                    raw, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        if api.has_api_key() {
            info!("AnythingLLM API key loaded from environment");
        } else {
            warn!(
                "ANYTHINGLLM_API_KEY not set - every tool call will fail until it is configured"
            );
        }

        api
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_api_env() {
        unsafe {
            std::env::remove_var("ANYTHINGLLM_BASE_URL");
            std::env::remove_var("ANYTHINGLLM_API_KEY");
            std::env::remove_var("ANYTHINGLLM_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        unsafe {
            std::env::set_var("ANYTHINGLLM_BASE_URL", "http://llm.internal:3001//");
            std::env::set_var("ANYTHINGLLM_API_KEY", "test_key_12345");
            std::env::set_var("ANYTHINGLLM_TIMEOUT_SECS", "30");
        }
        let api = ApiConfig::from_env();
        assert_eq!(api.base_url, "http://llm.internal:3001");
        assert_eq!(api.api_key, "test_key_12345");
        assert_eq!(api.timeout_secs, 30);
        clear_api_env();
    }

    #[test]
    fn test_api_config_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        let api = ApiConfig::from_env();
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert!(!api.has_api_key());
        assert_eq!(api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_env();
        unsafe {
            std::env::set_var("ANYTHINGLLM_TIMEOUT_SECS", "soon");
        }
        let api = ApiConfig::from_env();
        assert_eq!(api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        clear_api_env();
    }

    #[test]
    fn test_logging_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "0");
        }
        let logging = LoggingConfig::from_env();
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
        assert!(LoggingConfig::from_env().with_timestamps);
    }

    #[test]
    fn test_whitespace_key_is_not_usable() {
        let api = ApiConfig::new(DEFAULT_BASE_URL, "   ");
        assert!(!api.has_api_key());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig::new(DEFAULT_BASE_URL, "super_secret_key");
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
