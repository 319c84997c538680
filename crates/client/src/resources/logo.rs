//! Logo listing resource.

use adposting_domain::constants::{MEDIA_TYPE_LOGO_LIST, PARAM_ADVERTISER_ID};
use adposting_domain::LogoSummary;
use serde::Deserialize;

use crate::hal::{HalResource, MediaTyped, Paginated, ResourceContext};

/// Optional filters for the logo listing.
#[derive(Debug, Clone, Default)]
pub struct LogoListQuery {
    pub advertiser_id: Option<String>,
}

impl LogoListQuery {
    pub(crate) fn parameters(&self) -> Vec<(&'static str, &str)> {
        match &self.advertiser_id {
            Some(advertiser_id) => vec![(PARAM_ADVERTISER_ID, advertiser_id.as_str())],
            None => Vec::new(),
        }
    }
}

/// One page of logo summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoList {
    #[serde(rename = "_embedded")]
    embedded: LogoListEmbedded,
    #[serde(flatten)]
    context: ResourceContext,
}

#[derive(Debug, Clone, Deserialize)]
struct LogoListEmbedded {
    #[serde(default)]
    logos: Vec<LogoSummary>,
}

impl LogoList {
    pub fn logos(&self) -> &[LogoSummary] {
        &self.embedded.logos
    }
}

impl MediaTyped for LogoList {
    fn media_type() -> &'static str {
        MEDIA_TYPE_LOGO_LIST
    }
}

impl HalResource for LogoList {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut ResourceContext {
        &mut self.context
    }
}

impl Paginated for LogoList {}
