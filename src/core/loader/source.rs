//! Resource sources
//!
//! A [`ResourceSource`] turns an item identifier into raw bytes. The
//! default [`NetworkSource`] handles http(s), `file:` URLs, plain paths
//! and `data:` URIs.

use crate::config::Config;
use crate::utils::error::{ItemLoadError, Result};
use crate::utils::net::ClientUtils;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use reqwest::Client;
use std::path::PathBuf;
use tracing::trace;
use url::Url;

/// Fetches the bytes behind an identifier
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Settles exactly once: the resource bytes or why they are unavailable
    async fn fetch(&self, location: &str) -> std::result::Result<Bytes, ItemLoadError>;
}

/// Where an identifier points after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Remote(Url),
    File(PathBuf),
    Data(String),
}

/// Source for http(s), file and data identifiers
#[derive(Debug, Clone)]
pub struct NetworkSource {
    client: Client,
    base_url: Option<Url>,
}

impl NetworkSource {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Resolve relative identifiers against `base_url`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ClientUtils::create_http_client(&config.client)?;
        let source = Self::new(client);
        match &config.loader.base_url {
            Some(base_url) => Ok(source.with_base_url(ClientUtils::validate_url(base_url)?)),
            None => Ok(source),
        }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Work out what kind of location an identifier names
    pub fn resolve(&self, location: &str) -> std::result::Result<Location, ItemLoadError> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(ItemLoadError::invalid_location(location, "empty identifier"));
        }

        if trimmed
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
        {
            return Ok(Location::Data(trimmed.to_string()));
        }

        match Url::parse(trimmed) {
            Ok(url) => Self::classify(url, location),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => {
                    let joined = base
                        .join(trimmed)
                        .map_err(|e| ItemLoadError::invalid_location(location, e.to_string()))?;
                    Self::classify(joined, location)
                }
                None => Ok(Location::File(PathBuf::from(trimmed))),
            },
            Err(e) => Err(ItemLoadError::invalid_location(location, e.to_string())),
        }
    }

    fn classify(url: Url, location: &str) -> std::result::Result<Location, ItemLoadError> {
        match url.scheme() {
            "http" | "https" => Ok(Location::Remote(url)),
            "file" => url
                .to_file_path()
                .map(Location::File)
                .map_err(|_| ItemLoadError::invalid_location(location, "not a local file path")),
            scheme => Err(ItemLoadError::UnsupportedScheme(scheme.to_string())),
        }
    }

    async fn fetch_remote(&self, url: Url) -> std::result::Result<Bytes, ItemLoadError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ItemLoadError::status(url.as_str(), status.as_u16()));
        }
        Ok(response.bytes().await?)
    }
}

#[async_trait]
impl ResourceSource for NetworkSource {
    async fn fetch(&self, location: &str) -> std::result::Result<Bytes, ItemLoadError> {
        let resolved = self.resolve(location)?;
        trace!(location, resolved = ?resolved, "Fetching resource");

        match resolved {
            Location::Remote(url) => self.fetch_remote(url).await,
            Location::File(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
            Location::Data(uri) => decode_data_uri(&uri),
        }
    }
}

/// Decode the payload of a `data:` URI.
///
/// `;base64` payloads are base64-decoded; anything else is taken verbatim.
pub fn decode_data_uri(uri: &str) -> std::result::Result<Bytes, ItemLoadError> {
    let rest = uri
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("data:"))
        .map(|_| &uri[5..])
        .ok_or_else(|| ItemLoadError::data_uri("missing 'data:' prefix"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ItemLoadError::data_uri("missing ',' separator"))?;

    let is_base64 = meta
        .rsplit(';')
        .next()
        .is_some_and(|param| param.eq_ignore_ascii_case("base64"));

    if is_base64 {
        let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        STANDARD
            .decode(cleaned)
            .map(Bytes::from)
            .map_err(|e| ItemLoadError::data_uri(e.to_string()))
    } else {
        Ok(Bytes::copy_from_slice(payload.as_bytes()))
    }
}
