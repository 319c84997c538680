//! Data types exchanged with the Ad Posting API
//!
//! All request/response bodies are camelCase on the wire and omit null
//! fields when serialized.

pub mod advertisement;
pub mod logo;
pub mod template;

pub use advertisement::*;
pub use logo::*;
pub use template::*;
