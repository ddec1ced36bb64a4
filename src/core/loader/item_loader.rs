//! Image item loader
//!
//! One tokio task per item: fetch, decode on the blocking pool, store the
//! outcome at the item's index, signal. Every path ends in exactly one
//! store and one signal.

use super::loaded::{LoadOutcome, LoadedImage};
use super::source::{NetworkSource, ResourceSource};
use crate::config::Config;
use crate::core::batch::{ItemLoader, ItemSignal, Items, Results};
use crate::utils::error::{ItemLoadError, Result};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{Instrument, debug_span, trace, warn};

/// Loads and decodes images from a [`ResourceSource`]
#[derive(Clone)]
pub struct ImageLoader {
    source: Arc<dyn ResourceSource>,
}

impl ImageLoader {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    /// Loader over a [`NetworkSource`] built from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(NetworkSource::from_config(config)?)))
    }

    /// Fetch and decode one identifier
    pub async fn load(&self, location: &str) -> LoadOutcome<LoadedImage> {
        self.try_load(location).await.into()
    }

    async fn try_load(&self, location: &str) -> std::result::Result<LoadedImage, ItemLoadError> {
        let bytes = self.source.fetch(location).await?;
        let source = location.to_string();

        tokio::task::spawn_blocking(move || LoadedImage::decode(source, &bytes))
            .await
            .map_err(|e| ItemLoadError::Task(e.to_string()))?
    }
}

impl std::fmt::Debug for ImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageLoader").finish_non_exhaustive()
    }
}

impl ItemLoader<LoadedImage> for ImageLoader {
    /// Spawns the load on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    fn load_one(
        &self,
        items: &Items,
        results: &Results<LoadedImage>,
        index: usize,
        done: ItemSignal<LoadedImage>,
    ) {
        let Some(location) = items.get(index).map(str::to_string) else {
            warn!(index, items = items.len(), "Item index out of range");
            if let Err(e) = results.store(index, None) {
                warn!(error = %e, "Result not stored");
            }
            done.signal();
            return;
        };
        let loader = self.clone();
        let results = results.clone();
        let span = debug_span!("load_item", batch_id = %done.batch_id(), index);

        tokio::spawn(
            async move {
                let outcome = AssertUnwindSafe(loader.load(&location))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|_| {
                        LoadOutcome::Failed(ItemLoadError::Task("load panicked".to_string()))
                    });

                if let Some(err) = outcome.error() {
                    trace!(
                        location = %location,
                        kind = err.kind(),
                        error = %err,
                        "Item failed to load"
                    );
                }

                if let Err(e) = results.store(index, outcome.into_option()) {
                    warn!(error = %e, "Result not stored");
                }
                done.signal();
            }
            .instrument(span),
        );
    }
}
