//! HTTP Client utilities

pub mod utils;


pub use utils::ClientUtils;
