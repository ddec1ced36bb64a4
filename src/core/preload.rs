//! Async entry points
//!
//! Wraps the callback contract of [`BatchCoordinator::run`] in a future
//! that resolves with the index-aligned results.

use crate::core::batch::{BatchCoordinator, ItemLoader, Items, Results};
use crate::core::loader::{ImageLoader, LoadedImage};
use crate::utils::error::{PreloadError, Result};
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tracing::info;

/// Counts for a settled batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Items in the batch
    pub total: usize,
    /// Slots holding a value
    pub loaded: usize,
    /// Empty slots
    pub failed: usize,
    /// Wall time from dispatch to settlement
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

impl BatchSummary {
    pub fn from_slots<T>(slots: &[Option<T>], elapsed: Duration) -> Self {
        let loaded = slots.iter().filter(|slot| slot.is_some()).count();
        Self {
            total: slots.len(),
            loaded,
            failed: slots.len() - loaded,
            elapsed,
        }
    }

    pub fn all_loaded(&self) -> bool {
        self.failed == 0
    }
}

/// Run a batch with any loader and wait for it to settle.
///
/// An empty item list resolves immediately to an empty vector without
/// starting a batch. If every pending signal is dropped unsignaled the
/// future resolves to [`PreloadError::Abandoned`] instead of hanging.
pub async fn preload_with<T, L>(items: impl Into<Items>, loader: &L) -> Result<Vec<Option<T>>>
where
    T: Send + 'static,
    L: ItemLoader<T> + ?Sized,
{
    let items = items.into();
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let results = Results::new(items.len());
    let (tx, rx) = oneshot::channel();
    BatchCoordinator::run(items, &results, loader, move |slots| {
        // The receiver may be gone if the caller stopped waiting.
        let _ = tx.send(slots);
    })?;

    rx.await.map_err(|_| {
        PreloadError::Abandoned("every pending item dropped its completion signal".to_string())
    })
}

/// Preload images and wait for all of them to settle
pub async fn preload(
    items: impl Into<Items>,
    loader: &ImageLoader,
) -> Result<Vec<Option<LoadedImage>>> {
    preload_with::<LoadedImage, _>(items, loader).await
}

/// Preload images and report how the batch went
pub async fn preload_with_summary(
    items: impl Into<Items>,
    loader: &ImageLoader,
) -> Result<(Vec<Option<LoadedImage>>, BatchSummary)> {
    let started = Instant::now();
    let slots = preload(items, loader).await?;
    let summary = BatchSummary::from_slots(&slots, started.elapsed());

    info!(
        total = summary.total,
        loaded = summary.loaded,
        failed = summary.failed,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Preload finished"
    );
    Ok((slots, summary))
}
