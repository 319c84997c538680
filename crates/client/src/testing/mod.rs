//! Testing utilities and helpers
//!
//! This module provides fixture builders for contract tests:
//! - **[`builders`]**: fluent builders for advertisement payloads and raw
//!   HAL documents (ordered JSON objects with `_links`/`_embedded`)
//!
//! Available to downstream crates via the `test-utils` feature.

pub mod builders;

// Re-export commonly used items
pub use builders::{AdvertisementBuilder, DocumentBuilder};
