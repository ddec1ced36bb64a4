//! Loaded image handle

use crate::utils::error::ItemLoadError;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::sync::Arc;

/// A successfully fetched and decoded image
#[derive(Debug, Clone)]
pub struct LoadedImage {
    source: String,
    format: ImageFormat,
    width: u32,
    height: u32,
    byte_len: usize,
    image: Arc<DynamicImage>,
}

impl LoadedImage {
    /// Detect the format from the bytes and decode them
    pub fn decode(source: impl Into<String>, bytes: &[u8]) -> Result<Self, ItemLoadError> {
        let format = image::guess_format(bytes)?;
        let image = image::load_from_memory_with_format(bytes, format)?;
        let (width, height) = image.dimensions();

        Ok(Self {
            source: source.into(),
            format,
            width,
            height,
            byte_len: bytes.len(),
            image: Arc::new(image),
        })
    }

    /// Identifier the image was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Lowercase format name, e.g. `png`
    pub fn format_name(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("unknown")
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Size of the encoded bytes
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Shared handle to the decoded pixels
    pub fn shared_image(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.image)
    }
}

/// How one item settled
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Failed(ItemLoadError),
}

impl<T> LoadOutcome<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The value for a result slot: `None` marks a failed load
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ItemLoadError> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed(err) => Some(err),
        }
    }
}

impl<T> From<Result<T, ItemLoadError>> for LoadOutcome<T> {
    fn from(result: Result<T, ItemLoadError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err),
        }
    }
}
