//! Advertisement model types
//!
//! The [`Advertisement`] struct is the creation/update payload; `id`,
//! `state` and `expiry_date` are assigned by the server and ignored on
//! write. Nested value types mirror the API's document structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product tier of an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvertisementType {
    Classic,
    StandOut,
}

/// Lifecycle state assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvertisementState {
    Open,
    Expired,
}

/// Asynchronous processing state reported via the deprecated
/// `Processing-Status` response header on advertisement fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStatus {
    Pending,
    Completed,
    Failed,
    /// Header value the client does not recognize; kept verbatim semantics
    /// aside, treated as unknown rather than an error.
    Unknown,
}

impl ProcessingStatus {
    /// Parse the raw header value. Unrecognized values map to `Unknown`.
    pub fn from_header_value(value: &str) -> Self {
        match value {
            "Pending" => Self::Pending,
            "Completed" => Self::Completed,
            "Failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryType {
    AnnualPackage,
    AnnualCommission,
    CommissionOnly,
    HourlyRate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    #[serde(rename = "type")]
    pub salary_type: SalaryType,
    pub minimum: f64,
    pub maximum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Location of the advertised position, by server-defined identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLocation {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoPosition {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub url: String,
    pub position: VideoPosition,
}

/// StandOut-tier presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandOut {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub name: String,
    pub value: String,
}

/// Reference to a presentation template owned by the advertiser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateReference {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TemplateItem>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdditionalPropertyType {
    ResidentsOnly,
    Graduate,
}

/// An advertisement document.
///
/// Used both as the request body for create/update operations and as the
/// core fields of a fetched advertisement resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    /// Server-assigned identifier; absent on creation payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub advertiser_id: String,
    pub advertisement_type: AdvertisementType,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_job_title: Option<String>,
    pub job_summary: String,
    pub advertisement_details: String,
    pub location: JobLocation,
    pub salary: Salary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recruiter: Option<Recruiter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standout: Option<StandOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_properties: Vec<AdditionalPropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_id: Option<i32>,
    /// Server-assigned lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AdvertisementState>,
    /// Server-assigned expiry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
}

impl Advertisement {
    /// Copy of this advertisement with server-assigned fields cleared,
    /// suitable for equality checks against the original creation payload.
    pub fn without_server_fields(&self) -> Self {
        Self { id: None, state: None, expiry_date: None, ..self.clone() }
    }
}

/// Patch document used to expire an advertisement
/// (`application/vnd.adposting.advertisement-patch+json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementPatch {
    pub state: AdvertisementState,
}

impl AdvertisementPatch {
    pub fn expire() -> Self {
        Self { state: AdvertisementState::Expired }
    }
}

/// Reduced advertisement shape returned by the paginated summaries listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementSummary {
    pub advertiser_id: String,
    pub job_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<String>,
}
