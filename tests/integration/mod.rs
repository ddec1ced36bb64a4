//! Integration tests
//!
//! - `batch_tests`: coordinator and loader over real HTTP
//! - `config_tests`: configuration flowing into the loader

pub mod batch_tests;
pub mod config_tests;
