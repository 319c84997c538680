//! Test data builders with fluent API
//!
//! Provides builder patterns for constructing advertisement payloads and
//! raw HAL documents used by the contract tests.

// Builders are for test setup; panicking on malformed fixtures is fine there.
#![allow(clippy::missing_panics_doc)]

use adposting_domain::{
    Advertisement, AdvertisementType, JobLocation, Salary, SalaryType, StandOut,
};
use serde_json::{Map, Value};

/// Builder for a raw JSON document, preserving insertion order.
///
/// Useful for composing HAL bodies (`_links`, `_embedded`) served by mock
/// servers without going through the typed models.
///
/// # Examples
///
/// ```
/// use adposting_client::testing::DocumentBuilder;
///
/// let body = DocumentBuilder::new()
///     .set("jobTitle", "Senior Developer")
///     .link("self", "https://api.example.com/advertisement/1", false)
///     .build();
/// assert_eq!(body["_links"]["self"]["href"].as_str().unwrap().ends_with("/1"), true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    root: Map<String, Value>,
}

impl DocumentBuilder {
    /// Create an empty document builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing serializable value. Panics if the value does
    /// not serialize to a JSON object.
    pub fn from_value(value: impl serde::Serialize) -> Self {
        let serialized = serde_json::to_value(value).unwrap();
        match serialized {
            Value::Object(root) => Self { root },
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    /// Set a top-level field.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.root.insert(key.into(), value.into());
        self
    }

    /// Remove a top-level field.
    #[must_use]
    pub fn remove(mut self, key: &str) -> Self {
        self.root.remove(key);
        self
    }

    /// Add an entry under `_links`.
    #[must_use]
    pub fn link(mut self, relation: impl Into<String>, href: impl Into<String>, templated: bool) -> Self {
        let mut link = Map::new();
        link.insert("href".into(), Value::String(href.into()));
        if templated {
            link.insert("templated".into(), Value::Bool(true));
        }
        self.nested_insert("_links", relation.into(), Value::Object(link));
        self
    }

    /// Add an entry under `_embedded`.
    #[must_use]
    pub fn embed(mut self, relation: impl Into<String>, value: impl Into<Value>) -> Self {
        self.nested_insert("_embedded", relation.into(), value.into());
        self
    }

    fn nested_insert(&mut self, container: &str, key: String, value: Value) {
        let entry = self
            .root
            .entry(container.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match entry {
            Value::Object(map) => {
                map.insert(key, value);
            }
            other => panic!("{container} is not an object: {other}"),
        }
    }

    /// Build the final JSON value.
    pub fn build(self) -> Value {
        Value::Object(self.root)
    }
}

/// Builder for advertisement fixtures.
///
/// Produces a fully valid Classic advertisement by default; setters adjust
/// the fields a given test cares about.
///
/// # Examples
///
/// ```
/// use adposting_client::testing::AdvertisementBuilder;
///
/// let advertisement = AdvertisementBuilder::new()
///     .job_title("Staff Engineer")
///     .job_reference("REF-42")
///     .build();
/// assert_eq!(advertisement.job_title, "Staff Engineer");
/// ```
#[derive(Debug, Clone)]
pub struct AdvertisementBuilder {
    advertisement: Advertisement,
}

impl AdvertisementBuilder {
    /// Create a builder seeded with a valid Classic advertisement.
    pub fn new() -> Self {
        Self {
            advertisement: Advertisement {
                id: None,
                advertiser_id: "9012".into(),
                advertisement_type: AdvertisementType::Classic,
                job_title: "Senior Developer".into(),
                search_job_title: None,
                job_summary: "Build delightful software".into(),
                advertisement_details: "Exciting opportunity in a great team".into(),
                location: JobLocation { id: "Melbourne".into(), area_id: None },
                salary: Salary {
                    salary_type: SalaryType::AnnualPackage,
                    minimum: 100_000.0,
                    maximum: 120_000.0,
                    details: None,
                },
                recruiter: None,
                contact: None,
                video: None,
                standout: None,
                template: None,
                additional_properties: Vec::new(),
                job_reference: None,
                billing_reference: None,
                screen_id: None,
                state: None,
                expiry_date: None,
            },
        }
    }

    #[must_use]
    pub fn advertiser_id(mut self, advertiser_id: impl Into<String>) -> Self {
        self.advertisement.advertiser_id = advertiser_id.into();
        self
    }

    #[must_use]
    pub fn job_title(mut self, job_title: impl Into<String>) -> Self {
        self.advertisement.job_title = job_title.into();
        self
    }

    #[must_use]
    pub fn job_reference(mut self, job_reference: impl Into<String>) -> Self {
        self.advertisement.job_reference = Some(job_reference.into());
        self
    }

    /// Upgrade the fixture to a StandOut advertisement with the given logo.
    #[must_use]
    pub fn standout(mut self, logo_id: impl Into<String>, bullets: Vec<String>) -> Self {
        self.advertisement.advertisement_type = AdvertisementType::StandOut;
        self.advertisement.standout =
            Some(StandOut { logo_id: Some(logo_id.into()), bullets: Some(bullets) });
        self
    }

    #[must_use]
    pub fn salary(mut self, salary_type: SalaryType, minimum: f64, maximum: f64) -> Self {
        self.advertisement.salary = Salary { salary_type, minimum, maximum, details: None };
        self
    }

    /// Build the advertisement.
    pub fn build(self) -> Advertisement {
        self.advertisement
    }
}

impl Default for AdvertisementBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_builder_nests_links_and_embedded() {
        let body = DocumentBuilder::new()
            .set("jobTitle", "Senior Developer")
            .link("self", "https://api.example.com/advertisement/1", false)
            .link("advertisement", "https://api.example.com/advertisement/{advertisementId}", true)
            .embed("advertisements", Value::Array(vec![]))
            .build();

        assert_eq!(body["jobTitle"], "Senior Developer");
        assert_eq!(body["_links"]["self"]["href"], "https://api.example.com/advertisement/1");
        assert!(body["_links"]["self"].get("templated").is_none());
        assert_eq!(body["_links"]["advertisement"]["templated"], true);
        assert_eq!(body["_embedded"]["advertisements"], Value::Array(vec![]));
    }

    #[test]
    fn document_builder_wraps_typed_models() {
        let body = DocumentBuilder::from_value(AdvertisementBuilder::new().build())
            .set("id", "adv-1")
            .set("state", "Open")
            .link("self", "https://api.example.com/advertisement/adv-1", false)
            .build();

        assert_eq!(body["advertiserId"], "9012");
        assert_eq!(body["id"], "adv-1");
        assert_eq!(body["state"], "Open");
    }

    #[test]
    fn advertisement_builder_defaults_are_valid_classic() {
        let advertisement = AdvertisementBuilder::new().build();

        assert_eq!(advertisement.advertisement_type, AdvertisementType::Classic);
        assert!(advertisement.id.is_none());
        assert!(advertisement.standout.is_none());
    }

    #[test]
    fn advertisement_builder_standout_sets_tier_and_logo() {
        let advertisement = AdvertisementBuilder::new()
            .standout("logo-7", vec!["Perk one".into(), "Perk two".into()])
            .build();

        assert_eq!(advertisement.advertisement_type, AdvertisementType::StandOut);
        let standout = advertisement.standout.unwrap();
        assert_eq!(standout.logo_id.as_deref(), Some("logo-7"));
        assert_eq!(standout.bullets.unwrap().len(), 2);
    }
}
