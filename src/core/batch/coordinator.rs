//! Batch coordinator
//!
//! Fans out one `load_one` call per item and fires the completion callback
//! exactly once, after every item has signaled. The coordinator never
//! awaits anything itself; it only counts.

use super::counter::PendingCounter;
use super::items::Items;
use super::results::Results;
use crate::utils::error::{PreloadError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

type Completion<T> = Box<dyn FnOnce(Vec<Option<T>>) + Send + 'static>;

struct BatchState<T> {
    id: Uuid,
    pending: PendingCounter,
    results: Results<T>,
    on_all_complete: Mutex<Option<Completion<T>>>,
}

impl<T> BatchState<T> {
    fn complete_one(&self, index: usize) {
        match self.pending.complete_one() {
            Some(0) => {
                // Taken under the lock so the callback can only run once.
                let callback = self.on_all_complete.lock().take();
                if let Some(callback) = callback {
                    debug!(batch_id = %self.id, last_index = index, "Batch settled");
                    let slots = self.results.take();
                    self.results.release();
                    callback(slots);
                }
            }
            Some(remaining) => {
                trace!(batch_id = %self.id, index, remaining, "Item settled");
            }
            None => {
                warn!(batch_id = %self.id, index, "Completion signal after batch settled");
            }
        }
    }
}

/// Completion handle for one item of one batch.
///
/// Not `Clone`: [`ItemSignal::signal`] consumes it, so an item can signal
/// at most once. Dropping it unsignaled leaves the batch pending forever.
pub struct ItemSignal<T> {
    state: Arc<BatchState<T>>,
    index: usize,
    signaled: bool,
}

impl<T> ItemSignal<T> {
    /// Index of the item this signal belongs to
    pub fn index(&self) -> usize {
        self.index
    }

    /// Identifier of the owning batch
    pub fn batch_id(&self) -> Uuid {
        self.state.id
    }

    /// Report that this item has settled
    pub fn signal(mut self) {
        self.signaled = true;
        self.state.complete_one(self.index);
    }
}

impl<T> Drop for ItemSignal<T> {
    fn drop(&mut self) {
        if !self.signaled {
            warn!(
                batch_id = %self.state.id,
                index = self.index,
                "Item signal dropped without signaling; batch will not complete"
            );
        }
    }
}

impl<T> fmt::Debug for ItemSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemSignal")
            .field("batch_id", &self.state.id)
            .field("index", &self.index)
            .field("signaled", &self.signaled)
            .finish()
    }
}

/// Unit of work for one item.
///
/// `load_one` starts the load for `items[index]` and returns without
/// waiting. When the load settles it must store exactly one value at
/// `index` in `results` and then call `done.signal()`.
pub trait ItemLoader<T> {
    fn load_one(&self, items: &Items, results: &Results<T>, index: usize, done: ItemSignal<T>);
}

impl<T, F> ItemLoader<T> for F
where
    F: Fn(&Items, &Results<T>, usize, ItemSignal<T>),
{
    fn load_one(&self, items: &Items, results: &Results<T>, index: usize, done: ItemSignal<T>) {
        self(items, results, index, done)
    }
}

/// Completion barrier over one batch of items
pub struct BatchCoordinator;

impl BatchCoordinator {
    /// Dispatch every item and return how many were dispatched.
    ///
    /// An empty item list returns `Ok(0)` immediately and `on_all_complete`
    /// is never called. Otherwise `load_one` runs once per index, in order,
    /// before this returns; `on_all_complete` runs later on whichever task
    /// delivers the last signal, with the drained results.
    ///
    /// `results` must have one unset slot per item and must not belong to
    /// another batch that has not settled yet. It is released again just
    /// before `on_all_complete` runs.
    pub fn run<T, L, F>(
        items: impl Into<Items>,
        results: &Results<T>,
        load_one: &L,
        on_all_complete: F,
    ) -> Result<usize>
    where
        T: Send + 'static,
        L: ItemLoader<T> + ?Sized,
        F: FnOnce(Vec<Option<T>>) + Send + 'static,
    {
        let items = items.into();
        if items.is_empty() {
            trace!("Empty batch, nothing to dispatch");
            return Ok(0);
        }

        if results.len() != items.len() {
            return Err(PreloadError::validation(format!(
                "results container has {} slots for {} items",
                results.len(),
                items.len()
            )));
        }
        results.claim()?;
        if results.settled() != 0 {
            results.release();
            return Err(PreloadError::validation(
                "results container already holds settled slots",
            ));
        }

        let on_all_complete: Completion<T> = Box::new(on_all_complete);
        let state = Arc::new(BatchState {
            id: Uuid::new_v4(),
            pending: PendingCounter::new(items.len()),
            results: results.clone(),
            on_all_complete: Mutex::new(Some(on_all_complete)),
        });

        debug!(batch_id = %state.id, items = items.len(), "Dispatching batch");

        for index in 0..items.len() {
            let done = ItemSignal {
                state: Arc::clone(&state),
                index,
                signaled: false,
            };
            load_one.load_one(&items, results, index, done);
        }

        Ok(items.len())
    }
}
