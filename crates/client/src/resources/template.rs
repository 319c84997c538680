//! Template listing resource.

use adposting_domain::constants::{MEDIA_TYPE_TEMPLATE_LIST, PARAM_ADVERTISER_ID, PARAM_AFTER};
use adposting_domain::TemplateSummary;
use serde::Deserialize;

use crate::hal::{HalResource, MediaTyped, Paginated, ResourceContext};

/// Optional filters for the template listing, substituted into the
/// `templates` relation's URI template.
#[derive(Debug, Clone, Default)]
pub struct TemplateListQuery {
    pub advertiser_id: Option<String>,
    /// Opaque continuation token: only templates updated after this marker.
    pub after: Option<String>,
}

impl TemplateListQuery {
    pub(crate) fn parameters(&self) -> Vec<(&'static str, &str)> {
        let mut parameters = Vec::new();
        if let Some(advertiser_id) = &self.advertiser_id {
            parameters.push((PARAM_ADVERTISER_ID, advertiser_id.as_str()));
        }
        if let Some(after) = &self.after {
            parameters.push((PARAM_AFTER, after.as_str()));
        }
        parameters
    }
}

/// One page of template summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateList {
    #[serde(rename = "_embedded")]
    embedded: TemplateListEmbedded,
    #[serde(flatten)]
    context: ResourceContext,
}

#[derive(Debug, Clone, Deserialize)]
struct TemplateListEmbedded {
    #[serde(default)]
    templates: Vec<TemplateSummary>,
}

impl TemplateList {
    pub fn templates(&self) -> &[TemplateSummary] {
        &self.embedded.templates
    }
}

impl MediaTyped for TemplateList {
    fn media_type() -> &'static str {
        MEDIA_TYPE_TEMPLATE_LIST
    }
}

impl HalResource for TemplateList {
    fn context(&self) -> &ResourceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut ResourceContext {
        &mut self.context
    }
}

impl Paginated for TemplateList {}
