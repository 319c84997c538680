//! The index (entry point) resource.

use adposting_domain::constants::MEDIA_TYPE_INDEX;
use serde::Deserialize;

use crate::hal::{HalResource, MediaTyped, ResourceContext};

/// The well-known root resource.
///
/// Its links enumerate the entry points for advertisements, templates and
/// logos; every other URI the client uses is derived from them (or from
/// links found in subsequently fetched resources), never hardcoded.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexResource {
    #[serde(flatten)]
    context: ResourceContext,
}

impl MediaTyped for IndexResource {
    fn media_type() -> &'static str {
        MEDIA_TYPE_INDEX
    }
}

impl HalResource for IndexResource {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut ResourceContext {
        &mut self.context
    }
}
