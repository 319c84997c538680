//! The facade client: the single entry point consumers use.

use std::sync::Arc;

use adposting_domain::constants::{
    PARAM_ADVERTISEMENT_ID, RELATION_ADVERTISEMENT, RELATION_ADVERTISEMENTS, RELATION_LOGOS,
    RELATION_TEMPLATES,
};
use adposting_domain::{Advertisement, AdvertisementPatch, Result};
use tokio::sync::OnceCell;
use tracing::{info, instrument};
use url::Url;

use crate::auth::ClientCredentialsProvider;
use crate::config::ClientConfig;
use crate::hal::resource::HalResource;
use crate::hal::HalClient;
use crate::http::HttpClient;
use crate::pipeline::{BearerAuthStage, Pipeline, RequestStage, UserAgentStage};
use crate::resources::{
    AdvertisementList, AdvertisementResource, IndexResource, LogoList, LogoListQuery,
    TemplateList, TemplateListQuery,
};

/// Typed client for the Ad Posting API.
///
/// Owns the token provider and the underlying transport. The index
/// resource is bootstrapped lazily on first use: concurrent first calls
/// share a single in-flight GET, and the result is cached for the client's
/// lifetime.
pub struct Client {
    hal: HalClient,
    index_url: Url,
    index: OnceCell<IndexResource>,
}

impl Client {
    /// Build a client from configuration.
    ///
    /// Composes the request pipeline (user-agent stamping, bearer auth with
    /// a single 401-triggered reauthorization retry) around a shared
    /// transport. No network I/O happens until the first operation.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;

        let provider = Arc::new(ClientCredentialsProvider::new(
            http.clone(),
            config.token_url,
            config.client_id,
            config.client_secret,
        ));

        let stages: Vec<Box<dyn RequestStage>> = vec![
            Box::new(UserAgentStage::default()),
            Box::new(BearerAuthStage::new(provider)),
        ];
        let pipeline = Arc::new(Pipeline::new(stages));

        Ok(Self {
            hal: HalClient::new(http, pipeline),
            index_url: config.api_url,
            index: OnceCell::new(),
        })
    }

    /// The bootstrapped index resource. The first caller performs the GET;
    /// concurrent callers await the same in-flight request.
    async fn index(&self) -> Result<&IndexResource> {
        self.index
            .get_or_try_init(|| async {
                info!(url = %self.index_url, "bootstrapping index resource");
                self.hal.get::<IndexResource>(self.index_url.clone()).await
            })
            .await
    }

    /// Create a new advertisement.
    #[instrument(skip_all)]
    pub async fn create_advertisement(
        &self,
        advertisement: &Advertisement,
    ) -> Result<AdvertisementResource> {
        let index = self.index().await?;
        let url = index.links().generate_link(RELATION_ADVERTISEMENTS, &[])?;
        self.hal.post(url, advertisement).await
    }

    /// Fetch an advertisement by its identifier, resolved through the
    /// index's `advertisement` link template.
    #[instrument(skip(self))]
    pub async fn get_advertisement(&self, advertisement_id: &str) -> Result<AdvertisementResource> {
        let index = self.index().await?;
        let url = index
            .links()
            .generate_link(RELATION_ADVERTISEMENT, &[(PARAM_ADVERTISEMENT_ID, advertisement_id)])?;
        self.get_advertisement_at(url).await
    }

    /// Fetch an advertisement at a pre-resolved URI (e.g. obtained from a
    /// summary's links), bypassing the index.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get_advertisement_at(&self, url: Url) -> Result<AdvertisementResource> {
        self.hal.get(url).await
    }

    /// Replace an advertisement's content.
    #[instrument(skip(self, advertisement), fields(url = %url))]
    pub async fn update_advertisement(
        &self,
        url: Url,
        advertisement: &Advertisement,
    ) -> Result<AdvertisementResource> {
        self.hal.put(url, advertisement).await
    }

    /// Expire an advertisement.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn expire_advertisement(&self, url: Url) -> Result<AdvertisementResource> {
        self.hal.patch(url, &AdvertisementPatch::expire()).await
    }

    /// First page of the advertisement summaries listing. Use
    /// [`crate::hal::Paginated`] to walk subsequent pages.
    #[instrument(skip_all)]
    pub async fn get_all_advertisements(&self) -> Result<AdvertisementList> {
        let index = self.index().await?;
        let url = index.links().generate_link(RELATION_ADVERTISEMENTS, &[])?;
        self.hal.get(url).await
    }

    /// First page of templates matching the query.
    #[instrument(skip_all)]
    pub async fn get_templates(&self, query: &TemplateListQuery) -> Result<TemplateList> {
        let index = self.index().await?;
        let url = index.links().generate_link(RELATION_TEMPLATES, &query.parameters())?;
        self.hal.get(url).await
    }

    /// First page of logos matching the query.
    #[instrument(skip_all)]
    pub async fn get_logos(&self, query: &LogoListQuery) -> Result<LogoList> {
        let index = self.index().await?;
        let url = index.links().generate_link(RELATION_LOGOS, &query.parameters())?;
        self.hal.get(url).await
    }
}
