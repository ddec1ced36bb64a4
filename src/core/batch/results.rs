//! Index-aligned result slots

use crate::utils::error::{PreloadError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
enum Slot<T> {
    Unset,
    Settled(Option<T>),
}

/// Shared container with one write-once slot per item.
///
/// Clones share the same slots. A settled slot holds either the loaded
/// value or `None`, the failure sentinel. A container belongs to at most
/// one running batch at a time.
pub struct Results<T> {
    slots: Arc<Mutex<Vec<Slot<T>>>>,
    claimed: Arc<AtomicBool>,
}

impl<T> Clone for Results<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            claimed: Arc::clone(&self.claimed),
        }
    }
}

impl<T> fmt::Debug for Results<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Results")
            .field("len", &self.len())
            .field("settled", &self.settled())
            .field("claimed", &self.is_claimed())
            .finish()
    }
}

impl<T> Results<T> {
    /// Container with `len` unset slots
    pub fn new(len: usize) -> Self {
        let slots = std::iter::repeat_with(|| Slot::Unset).take(len).collect();
        Self {
            slots: Arc::new(Mutex::new(slots)),
            claimed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots already written
    pub fn settled(&self) -> usize {
        self.slots
            .lock()
            .iter()
            .filter(|slot| matches!(slot, Slot::Settled(_)))
            .count()
    }

    /// Whether a running batch currently owns this container
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    /// Take ownership for one batch. Fails if another batch holds it.
    pub(crate) fn claim(&self) -> Result<()> {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| {
                PreloadError::validation("results container is in use by another batch")
            })
    }

    pub(crate) fn release(&self) {
        self.claimed.store(false, Ordering::Release);
    }

    /// Write slot `index` once. `None` records a failed load.
    pub fn store(&self, index: usize, value: Option<T>) -> Result<()> {
        let mut slots = self.slots.lock();
        let len = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or_else(|| PreloadError::slot(index, format!("out of range for {} slots", len)))?;

        match slot {
            Slot::Unset => {
                *slot = Slot::Settled(value);
                Ok(())
            }
            Slot::Settled(_) => Err(PreloadError::slot(index, "already written")),
        }
    }

    /// Drain every slot. Unset and failed slots both come out as `None`.
    pub fn take(&self) -> Vec<Option<T>> {
        let mut slots = self.slots.lock();
        slots
            .iter_mut()
            .map(|slot| match std::mem::replace(slot, Slot::Unset) {
                Slot::Settled(value) => value,
                Slot::Unset => None,
            })
            .collect()
    }
}
