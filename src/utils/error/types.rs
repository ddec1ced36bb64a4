//! Error types for the preloader

use thiserror::Error;

/// Result type alias for the preloader
pub type Result<T> = std::result::Result<T, PreloadError>;

/// Main error type for the preloader
#[derive(Error, Debug)]
pub enum PreloadError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejected write into a results container
    #[error("Result slot {index}: {reason}")]
    Slot { index: usize, reason: String },

    /// Batch dropped every pending signal without settling
    #[error("Batch abandoned: {0}")]
    Abandoned(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Malformed configuration YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single item failed to load.
///
/// This is the only failure kind a batch knows about. The loader records it
/// as an empty slot; callers see the cause only through tracing.
#[derive(Error, Debug)]
pub enum ItemLoadError {
    /// The identifier could not be turned into a location
    #[error("Invalid location '{location}': {message}")]
    InvalidLocation { location: String, message: String },

    /// URL scheme the source cannot fetch
    #[error("Unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Local file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed `data:` URI
    #[error("Invalid data URI: {0}")]
    DataUri(String),

    /// Bytes were fetched but are not a decodable image
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// The load task died before settling
    #[error("Load task failed: {0}")]
    Task(String),
}
