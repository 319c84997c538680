//! The `_links` relation map of a resource.

use std::collections::HashMap;

use adposting_domain::{AdPostingError, Result};
use serde::Deserialize;
use url::Url;

use super::link::Link;

/// Named link relations of a resource plus the base URL used to resolve
/// relative hrefs into absolute URIs.
///
/// A relation absent from the map means the corresponding operation is
/// unsupported by the current server state; callers use [`Links::contains`]
/// for capability discovery (e.g. "is there a next page?").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(flatten)]
    map: HashMap<String, Link>,
    #[serde(skip)]
    base_url: Option<Url>,
}

impl Links {
    /// Base URL against which relative hrefs are resolved. Installed by the
    /// HAL client from the URL the resource was fetched from.
    pub fn set_base_url(&mut self, base_url: Url) {
        self.base_url = Some(base_url);
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn contains(&self, relation: &str) -> bool {
        self.map.contains_key(relation)
    }

    pub fn get(&self, relation: &str) -> Option<&Link> {
        self.map.get(relation)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolve the named relation with the supplied template parameters
    /// into an absolute URI.
    ///
    /// # Errors
    ///
    /// Requesting a relation absent from the map is a programming error
    /// ("unsupported operation") and fails with
    /// [`AdPostingError::MissingRelation`].
    pub fn generate_link(&self, relation: &str, parameters: &[(&str, &str)]) -> Result<Url> {
        let link = self
            .map
            .get(relation)
            .ok_or_else(|| AdPostingError::MissingRelation { relation: relation.to_string() })?;

        let resolved = link.resolve(parameters);

        match &self.base_url {
            Some(base) => base.join(&resolved).map_err(Into::into),
            // Absolute hrefs still work without a base.
            None => Url::parse(&resolved).map_err(|_| {
                AdPostingError::Internal(format!(
                    "relative link '{resolved}' cannot be resolved without a base URL"
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_with_base(json: serde_json::Value) -> Links {
        let mut links: Links = serde_json::from_value(json).unwrap();
        links.set_base_url(Url::parse("http://api.example.net/base/").unwrap());
        links
    }

    #[test]
    fn deserializes_relation_map() {
        let links = links_with_base(serde_json::json!({
            "self": { "href": "/advertisement/1" },
            "advertisement": { "href": "/advertisement/{advertisementId}", "templated": true }
        }));

        assert!(links.contains("self"));
        assert!(links.contains("advertisement"));
        assert!(!links.contains("next"));
        assert!(links.get("advertisement").unwrap().templated);
    }

    #[test]
    fn generates_absolute_uri_from_relative_href() {
        let links = links_with_base(serde_json::json!({
            "self": { "href": "/advertisement/1" }
        }));

        let url = links.generate_link("self", &[]).unwrap();
        assert_eq!(url.as_str(), "http://api.example.net/advertisement/1");
    }

    #[test]
    fn generates_templated_uri_with_parameters() {
        let links = links_with_base(serde_json::json!({
            "advertisement": { "href": "/advertisement/{advertisementId}", "templated": true }
        }));

        let url = links.generate_link("advertisement", &[("advertisementId", "42")]).unwrap();
        assert_eq!(url.as_str(), "http://api.example.net/advertisement/42");
    }

    #[test]
    fn missing_relation_fails_loudly() {
        let links = links_with_base(serde_json::json!({}));

        match links.generate_link("next", &[]) {
            Err(AdPostingError::MissingRelation { relation }) => assert_eq!(relation, "next"),
            other => panic!("expected MissingRelation, got {other:?}"),
        }
    }

    #[test]
    fn absolute_href_works_without_base_url() {
        let links: Links = serde_json::from_value(serde_json::json!({
            "self": { "href": "http://other.example.net/advertisement/7" }
        }))
        .unwrap();

        let url = links.generate_link("self", &[]).unwrap();
        assert_eq!(url.as_str(), "http://other.example.net/advertisement/7");
    }
}
