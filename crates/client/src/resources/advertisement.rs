//! Advertisement resources: the full document and the paginated summary
//! listing.

use adposting_domain::constants::{
    HEADER_PROCESSING_STATUS, MEDIA_TYPE_ADVERTISEMENT, MEDIA_TYPE_ADVERTISEMENT_LIST,
    RELATION_VIEW,
};
use adposting_domain::{
    Advertisement, AdvertisementPatch, AdvertisementSummary, ProcessingStatus, Result,
};
use reqwest::header::HeaderMap;
use serde::Deserialize;
use url::Url;

use crate::hal::{HalClient, HalResource, Links, MediaTyped, Paginated, ResourceContext};

/// A fetched advertisement with its navigation links.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisementResource {
    #[serde(flatten)]
    pub content: Advertisement,
    #[serde(flatten)]
    context: ResourceContext,
    #[serde(skip)]
    processing_status: Option<ProcessingStatus>,
}

impl AdvertisementResource {
    /// Value of the deprecated `Processing-Status` response header, when
    /// the server sent one.
    pub fn processing_status(&self) -> Option<ProcessingStatus> {
        self.processing_status
    }

    /// Replace this advertisement's content (PUT to its `self` link).
    pub async fn save(&self, advertisement: &Advertisement) -> Result<AdvertisementResource> {
        let (client, url) = self.transport()?;
        client.put(url, advertisement).await
    }

    /// Expire this advertisement (PATCH to its `self` link).
    pub async fn expire(&self) -> Result<AdvertisementResource> {
        let (client, url) = self.transport()?;
        client.patch(url, &AdvertisementPatch::expire()).await
    }

    fn transport(&self) -> Result<(HalClient, Url)> {
        let client = self.context.client()?.clone();
        let url = self
            .context
            .uri
            .clone()
            .ok_or_else(|| adposting_domain::AdPostingError::Internal(
                "advertisement resource has no self link".into(),
            ))?;
        Ok((client, url))
    }
}

impl MediaTyped for AdvertisementResource {
    fn media_type() -> &'static str {
        MEDIA_TYPE_ADVERTISEMENT
    }
}

impl HalResource for AdvertisementResource {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut ResourceContext {
        &mut self.context
    }

    // Declared header mapping: Processing-Status -> processing_status.
    fn absorb_headers(&mut self, headers: &HeaderMap) {
        self.processing_status = headers
            .get(HEADER_PROCESSING_STATUS)
            .and_then(|value| value.to_str().ok())
            .map(ProcessingStatus::from_header_value);
    }
}

/// One entry of the summary listing, with its own relation links
/// (`self`, `view`).
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisementSummaryResource {
    #[serde(flatten)]
    pub content: AdvertisementSummary,
    #[serde(flatten)]
    context: ResourceContext,
}

impl AdvertisementSummaryResource {
    pub fn links(&self) -> &Links {
        &self.context.links
    }

    /// Absolute URI of the full advertisement resource.
    pub fn uri(&self) -> Option<&Url> {
        self.context.uri.as_ref()
    }

    /// URI of the human-viewable advertisement page.
    pub fn view_url(&self) -> Result<Url> {
        self.context.links.generate_link(RELATION_VIEW, &[])
    }
}

/// One page of advertisement summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvertisementList {
    #[serde(rename = "_embedded")]
    embedded: AdvertisementListEmbedded,
    #[serde(flatten)]
    context: ResourceContext,
}

// Statically declared embedded relations of the listing.
#[derive(Debug, Clone, Deserialize)]
struct AdvertisementListEmbedded {
    #[serde(default)]
    advertisements: Vec<AdvertisementSummaryResource>,
}

impl AdvertisementList {
    pub fn advertisements(&self) -> &[AdvertisementSummaryResource] {
        &self.embedded.advertisements
    }
}

impl MediaTyped for AdvertisementList {
    fn media_type() -> &'static str {
        MEDIA_TYPE_ADVERTISEMENT_LIST
    }
}

impl HalResource for AdvertisementList {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut ResourceContext {
        &mut self.context
    }

    fn attach_transport(&mut self, client: &HalClient, base: &Url) {
        self.context.install(client, base);
        for summary in &mut self.embedded.advertisements {
            summary.context.install(client, base);
        }
    }
}

impl Paginated for AdvertisementList {}
