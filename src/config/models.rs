//! Configuration data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default user agent sent with HTTP loads
pub fn default_user_agent() -> String {
    concat!("image-preload/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP client configuration.
///
/// Timeouts are unset by default so the client's own behavior applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds
    pub connect_timeout_secs: Option<u64>,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Proxy URL applied to all schemes
    pub proxy: Option<String>,
    /// Headers added to every request
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: default_user_agent(),
            proxy: None,
            default_headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Item loader configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base URL that relative identifiers are resolved against
    pub base_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
