//! # AdPosting Client
//!
//! Typed hypermedia (HAL) client for the Ad Posting API.
//!
//! This crate contains:
//! - The HAL core: links, URI-template resolution and the [`hal::HalClient`]
//! - A composable request pipeline (user-agent stamping, bearer auth with a
//!   single reauthorization retry on 401)
//! - An OAuth2 client-credentials token provider
//! - Typed resources with embedded sub-resources and server-driven
//!   pagination
//! - The [`Client`] facade, which bootstraps the index resource lazily and
//!   resolves every operation URI from hypermedia links instead of
//!   hardcoded paths
//!
//! ## Architecture
//! - Depends on `adposting-domain` for models and the error taxonomy
//! - Contains all I/O (reqwest transport, token endpoint calls)
//!
//! ## Usage
//!
//! ```no_run
//! use adposting_client::{Client, ClientConfig, Environment, HalResource};
//!
//! # async fn example(advertisement: adposting_domain::Advertisement)
//! #     -> adposting_domain::Result<()> {
//! let config = ClientConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .credentials("client_id", "client_secret")
//!     .build()?;
//! let client = Client::new(config)?;
//!
//! let created = client.create_advertisement(&advertisement).await?;
//! println!("created at {:?}", created.uri());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod hal;
pub mod http;
pub mod pipeline;
pub mod resources;

// Testing utilities (fixture builders for contract tests)
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used items
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder, Environment};
pub use hal::{HalClient, HalResource, Link, Links, MediaTyped, Paginated};
pub use resources::{
    AdvertisementList, AdvertisementResource, AdvertisementSummaryResource, IndexResource,
    LogoList, LogoListQuery, TemplateList, TemplateListQuery,
};

// Re-export the domain crate for downstream convenience
pub use adposting_domain as domain;
