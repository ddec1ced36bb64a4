//! Common test utilities
//!
//! ```rust,ignore
//! use crate::common::{ImageServer, png_bytes};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = ImageServer::start().await;
//!     server.serve_png("/a.png", 4, 4).await;
//!     // load server.url("/a.png")
//! }
//! ```

pub mod fixtures;

pub use fixtures::{ImageServer, jpeg_bytes, png_bytes};
