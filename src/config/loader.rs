//! Environment overrides
//!
//! Recognized variables: `PRELOAD_TIMEOUT`, `PRELOAD_CONNECT_TIMEOUT`,
//! `PRELOAD_USER_AGENT`, `PRELOAD_PROXY`, `PRELOAD_BASE_URL`,
//! `PRELOAD_LOG_LEVEL`, `PRELOAD_LOG_JSON`.

use super::Config;
use crate::utils::error::{PreloadError, Result};
use std::env;
use tracing::debug;

impl Config {
    /// Apply `PRELOAD_*` variables on top of the current values
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_vars(|key| env::var(key).ok())?;
        Ok(self)
    }

    /// Apply overrides from any key lookup; `apply_env` uses the process
    /// environment.
    pub(crate) fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(timeout) = lookup("PRELOAD_TIMEOUT") {
            self.client.timeout_secs = Some(
                timeout
                    .parse()
                    .map_err(|e| PreloadError::config(format!("Invalid timeout: {}", e)))?,
            );
        }
        if let Some(timeout) = lookup("PRELOAD_CONNECT_TIMEOUT") {
            self.client.connect_timeout_secs = Some(
                timeout
                    .parse()
                    .map_err(|e| PreloadError::config(format!("Invalid connect timeout: {}", e)))?,
            );
        }
        if let Some(user_agent) = lookup("PRELOAD_USER_AGENT") {
            self.client.user_agent = user_agent;
        }
        if let Some(proxy) = lookup("PRELOAD_PROXY") {
            self.client.proxy = Some(proxy);
        }
        if let Some(base_url) = lookup("PRELOAD_BASE_URL") {
            self.loader.base_url = Some(base_url);
        }
        if let Some(level) = lookup("PRELOAD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("PRELOAD_LOG_JSON") {
            self.logging.json = json
                .parse()
                .map_err(|e| PreloadError::config(format!("Invalid log json flag: {}", e)))?;
        }

        debug!("Environment overrides applied");
        Ok(())
    }
}
