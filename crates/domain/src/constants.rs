//! Domain constants
//!
//! Centralized location for the vendor media types, header names and link
//! relations used by the Ad Posting API.

/// Media type vendor prefix shared by every resource representation.
pub const MEDIA_TYPE_PREFIX: &str = "application/vnd.adposting";

// Resource media types (versioned vendor types, sent as Accept/Content-Type)
pub const MEDIA_TYPE_INDEX: &str = "application/vnd.adposting.index+json;version=1";
pub const MEDIA_TYPE_ADVERTISEMENT: &str = "application/vnd.adposting.advertisement+json;version=1";
pub const MEDIA_TYPE_ADVERTISEMENT_LIST: &str =
    "application/vnd.adposting.advertisement-list+json;version=1";
pub const MEDIA_TYPE_ADVERTISEMENT_PATCH: &str =
    "application/vnd.adposting.advertisement-patch+json;version=1";
pub const MEDIA_TYPE_TEMPLATE_LIST: &str =
    "application/vnd.adposting.template-list+json;version=1";
pub const MEDIA_TYPE_LOGO_LIST: &str = "application/vnd.adposting.logo-list+json;version=1";
pub const MEDIA_TYPE_ERROR: &str = "application/vnd.adposting.error+json;version=1";

// Response headers consumed by the client
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";
pub const HEADER_PROCESSING_STATUS: &str = "Processing-Status";
pub const HEADER_RETRY_AFTER: &str = "Retry-After";
pub const HEADER_LOCATION: &str = "Location";

// Link relations discovered from the index resource and drill-down responses
pub const RELATION_SELF: &str = "self";
pub const RELATION_NEXT: &str = "next";
pub const RELATION_VIEW: &str = "view";
pub const RELATION_ADVERTISEMENTS: &str = "advertisements";
pub const RELATION_ADVERTISEMENT: &str = "advertisement";
pub const RELATION_TEMPLATES: &str = "templates";
pub const RELATION_LOGOS: &str = "logos";

// URI template parameter names
pub const PARAM_ADVERTISEMENT_ID: &str = "advertisementId";
pub const PARAM_ADVERTISER_ID: &str = "advertiserId";
pub const PARAM_AFTER: &str = "after";
