use crate::config::ClientConfig;
use crate::utils::error::{PreloadError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, Proxy};
use tracing::debug;
use url::Url;

/// Utility functions for HTTP client operations
pub struct ClientUtils;

impl ClientUtils {
    /// Creates an HTTP client with the specified configuration
    pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
        let mut client_builder = ClientBuilder::new().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(connect_timeout) = config.connect_timeout() {
            client_builder = client_builder.connect_timeout(connect_timeout);
        }

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                PreloadError::config(format!("Invalid proxy configuration: {}", e))
            })?;
            client_builder = client_builder.proxy(proxy);
        }

        if !config.default_headers.is_empty() {
            let mut headers = HeaderMap::new();
            for (key, value) in &config.default_headers {
                headers.insert(
                    HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                        PreloadError::config(format!("Invalid header name '{}': {}", key, e))
                    })?,
                    HeaderValue::from_str(value).map_err(|e| {
                        PreloadError::config(format!("Invalid header value for '{}': {}", key, e))
                    })?,
                );
            }
            client_builder = client_builder.default_headers(headers);
        }

        let client = client_builder.build()?;
        debug!(user_agent = %config.user_agent, "HTTP client created");
        Ok(client)
    }

    /// Parses a URL and requires an http or https scheme
    pub fn validate_url(url: &str) -> Result<Url> {
        let parsed = Url::parse(url)
            .map_err(|e| PreloadError::validation(format!("Invalid URL '{}': {}", url, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(PreloadError::validation(format!(
                "Unsupported URL scheme '{}'. Only http and https are supported",
                scheme
            ))),
        }
    }
}
