//! Network utilities
//!
//! HTTP client construction and URL checks shared by config validation and
//! the network resource source.

pub mod client;

pub use client::ClientUtils;
