//! Batch coordination
//!
//! Items go in, one load is started per item, and a single callback
//! receives the index-aligned results once every load has settled.

mod coordinator;
mod counter;
mod items;
mod results;


pub use coordinator::{BatchCoordinator, ItemLoader, ItemSignal};
pub use counter::PendingCounter;
pub use items::Items;
pub use results::Results;
