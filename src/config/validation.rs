//! Configuration validation

use super::Config;
use super::models::*;
use crate::utils::error::{PreloadError, Result};
use crate::utils::net::ClientUtils;
use reqwest::header::{HeaderName, HeaderValue};
use tracing::debug;

/// Configuration validation trait
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        debug!("Validating preload configuration");
        self.client.validate()?;
        self.loader.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(PreloadError::config("User agent cannot be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(PreloadError::config("Timeout must be greater than 0"));
        }

        if self.connect_timeout_secs == Some(0) {
            return Err(PreloadError::config("Connect timeout must be greater than 0"));
        }

        if let Some(proxy) = &self.proxy {
            reqwest::Proxy::all(proxy)
                .map_err(|e| PreloadError::config(format!("Invalid proxy '{}': {}", proxy, e)))?;
        }

        for (name, value) in &self.default_headers {
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                PreloadError::config(format!("Invalid header name '{}': {}", name, e))
            })?;
            HeaderValue::from_str(value).map_err(|e| {
                PreloadError::config(format!("Invalid header value for '{}': {}", name, e))
            })?;
        }

        Ok(())
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            ClientUtils::validate_url(base_url)
                .map_err(|e| PreloadError::config(format!("Invalid base URL: {}", e)))?;
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        tracing_subscriber::EnvFilter::try_new(&self.level).map_err(|e| {
            PreloadError::config(format!("Invalid log level '{}': {}", self.level, e))
        })?;
        Ok(())
    }
}
