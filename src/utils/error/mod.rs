//! Error handling utilities
//!
//! Crate-level errors (`PreloadError`) and the per-item failure cause
//! (`ItemLoadError`). Item failures never escape a batch; they are folded
//! into an empty result slot by the loader.

mod helpers;
mod types;

#[cfg(test)]
mod tests;

pub use types::{ItemLoadError, PreloadError, Result};
