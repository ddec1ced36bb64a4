//! # image-preload
//!
//! Parallel image preloading with a single completion barrier.
//!
//! Every source in a batch is loaded concurrently. Once all of them have
//! settled, one callback receives the results, aligned with the input
//! order. A source that cannot be fetched or decoded leaves `None` in its
//! slot; it never fails the batch.
//!
//! ## Callback style
//!
//! ```rust,no_run
//! use image_preload::{BatchCoordinator, Config, ImageLoader, Results};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = ImageLoader::from_config(&Config::default())?;
//!     let items = vec!["https://example.com/a.png", "https://example.com/b.png"];
//!     let results = Results::new(items.len());
//!
//!     BatchCoordinator::run(items, &results, &loader, |images| {
//!         let loaded = images.iter().flatten().count();
//!         println!("{} of {} images loaded", loaded, images.len());
//!     })?;
//!
//!     // `run` returned right away; the callback fires on a runtime task.
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     Ok(())
//! }
//! ```
//!
//! ## Async style
//!
//! ```rust,no_run
//! use image_preload::{Config, ImageLoader, preload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = ImageLoader::from_config(&Config::default())?;
//!     let images = preload("https://example.com/single.png", &loader).await?;
//!
//!     if let Some(image) = &images[0] {
//!         println!("{}x{}", image.width(), image.height());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{ItemLoadError, PreloadError, Result};

pub use crate::core::batch::{
    BatchCoordinator, ItemLoader, ItemSignal, Items, PendingCounter, Results,
};
pub use crate::core::loader::{
    ImageLoader, LoadOutcome, LoadedImage, Location, NetworkSource, ResourceSource,
};
pub use crate::core::preload::{BatchSummary, preload, preload_with, preload_with_summary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version plus build metadata recorded by the build script
pub const BUILD_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (git ",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIME"),
    ", ",
    env!("RUST_VERSION"),
    ")"
);
