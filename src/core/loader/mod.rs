//! Item loading
//!
//! Per-item image loads for the batch coordinator. Failures never leave an
//! item: they become an empty result slot.

mod item_loader;
mod loaded;
mod source;


pub use item_loader::ImageLoader;
pub use loaded::{LoadOutcome, LoadedImage};
pub use source::{Location, NetworkSource, ResourceSource, decode_data_uri};
