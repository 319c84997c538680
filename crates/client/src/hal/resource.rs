//! The typed resource contract.
//!
//! Each resource type statically declares its media type, where its
//! [`ResourceContext`] lives, and (for resources with `_embedded`
//! sections) how to push transport context down into nested resources.
//! This replaces the runtime attribute inspection of a reflection-based
//! design with an explicit per-type declaration.

use adposting_domain::constants::{RELATION_NEXT, RELATION_SELF};
use adposting_domain::{AdPostingError, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::client::HalClient;
use super::links::Links;

/// A type with a declared vendor media type, used for `Accept` on reads
/// and `Content-Type` on writes.
pub trait MediaTyped {
    fn media_type() -> &'static str;
}

/// Navigation state attached to every fetched resource: its `_links`
/// section, the absolute URI derived from its `self` link, and a
/// back-reference to the client that fetched it so relation-based follow-up
/// requests need no transport plumbing from the caller.
#[derive(Clone, Default, Deserialize)]
pub struct ResourceContext {
    #[serde(rename = "_links", default)]
    pub links: Links,
    #[serde(skip)]
    pub uri: Option<Url>,
    #[serde(skip)]
    pub client: Option<HalClient>,
}

impl std::fmt::Debug for ResourceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceContext")
            .field("links", &self.links)
            .field("uri", &self.uri)
            .field("attached", &self.client.is_some())
            .finish()
    }
}

impl ResourceContext {
    /// Install transport state after deserialization.
    pub(crate) fn install(&mut self, client: &HalClient, base: &Url) {
        self.links.set_base_url(base.clone());
        // The canonical URI comes from the self link; resources without one
        // (e.g. embedded children) keep the URL they were fetched under.
        self.uri = self
            .links
            .generate_link(RELATION_SELF, &[])
            .ok()
            .or_else(|| Some(base.clone()));
        self.client = Some(client.clone());
    }

    /// Client back-reference, failing if the resource was constructed by
    /// hand rather than fetched through a [`HalClient`].
    pub(crate) fn client(&self) -> Result<&HalClient> {
        self.client
            .as_ref()
            .ok_or_else(|| AdPostingError::Internal("resource is not attached to a client".into()))
    }
}

/// Contract implemented by every typed API resource.
pub trait HalResource: DeserializeOwned + MediaTyped + Send + Sync {
    fn context(&self) -> &ResourceContext;

    fn context_mut(&mut self) -> &mut ResourceContext;

    /// Install transport context; resources with `_embedded` sections
    /// override this to recurse into their children.
    fn attach_transport(&mut self, client: &HalClient, base: &Url) {
        self.context_mut().install(client, base);
    }

    /// Capture declared response headers into resource fields. The default
    /// captures nothing.
    fn absorb_headers(&mut self, _headers: &HeaderMap) {}

    fn links(&self) -> &Links {
        &self.context().links
    }

    /// Absolute URI of this resource, derived from its `self` link.
    fn uri(&self) -> Option<&Url> {
        self.context().uri.as_ref()
    }
}

/// Server-driven pagination over list resources.
///
/// The server signals the end of a result set by omitting the `next`
/// relation; `eof` is true exactly in that case.
#[async_trait]
pub trait Paginated: HalResource {
    fn eof(&self) -> bool {
        !self.links().contains(RELATION_NEXT)
    }

    /// Follow the `next` relation to the following page.
    ///
    /// # Errors
    ///
    /// Fails with [`AdPostingError::NoMoreResults`] when called on the last
    /// page.
    async fn next_page(&self) -> Result<Self> {
        if self.eof() {
            return Err(AdPostingError::NoMoreResults);
        }

        let context = self.context();
        let client = context.client()?.clone();
        let url = context.links.generate_link(RELATION_NEXT, &[])?;
        client.get(url).await
    }
}
