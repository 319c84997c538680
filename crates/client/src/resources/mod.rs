//! Typed HAL resources returned by the API.
//!
//! Each resource statically declares its media type and, where the API
//! embeds sub-resources, an explicit `_embedded` struct listing them.

pub mod advertisement;
pub mod index;
pub mod logo;
pub mod template;

pub use advertisement::{AdvertisementList, AdvertisementResource, AdvertisementSummaryResource};
pub use index::IndexResource;
pub use logo::{LogoList, LogoListQuery};
pub use template::{TemplateList, TemplateListQuery};

use adposting_domain::constants::{MEDIA_TYPE_ADVERTISEMENT, MEDIA_TYPE_ADVERTISEMENT_PATCH};
use adposting_domain::{Advertisement, AdvertisementPatch};

use crate::hal::MediaTyped;

// Request-body media types for the write operations.
impl MediaTyped for Advertisement {
    fn media_type() -> &'static str {
        MEDIA_TYPE_ADVERTISEMENT
    }
}

impl MediaTyped for AdvertisementPatch {
    fn media_type() -> &'static str {
        MEDIA_TYPE_ADVERTISEMENT_PATCH
    }
}
