//! HAL hypermedia core
//!
//! This module implements the `_links`/`_embedded` convention: link
//! relations discovered at runtime, RFC6570-style URI-template resolution,
//! the typed resource contract, and the [`HalClient`] that performs the
//! HTTP verbs and maps non-2xx statuses into the error taxonomy.

pub mod client;
pub mod link;
pub mod links;
pub mod resource;

pub use client::HalClient;
pub use link::Link;
pub use links::Links;
pub use resource::{HalResource, MediaTyped, Paginated, ResourceContext};
