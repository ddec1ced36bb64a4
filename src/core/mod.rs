//! Core preloading logic
//!
//! - `batch`: the completion barrier over a set of items
//! - `loader`: per-item image loads
//! - `preload`: async wrappers that await a whole batch

pub mod batch;
pub mod loader;
pub mod preload;
