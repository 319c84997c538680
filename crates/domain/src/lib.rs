//! # AdPosting Domain
//!
//! Domain types and models for the Ad Posting API client.
//!
//! This crate contains:
//! - Advertisement, template and logo data types
//! - The client error taxonomy and Result definitions
//! - Media type, header and link-relation constants
//!
//! ## Architecture
//! - No dependencies on other adposting crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures (no I/O)

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
