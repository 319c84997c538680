//! The HAL client: HTTP verbs, typed deserialization and the unified
//! non-2xx status dispatch table.

use std::sync::Arc;
use std::time::Duration;

use adposting_domain::constants::{
    HEADER_LOCATION, HEADER_REQUEST_ID, HEADER_RETRY_AFTER,
};
use adposting_domain::{AdPostingError, ErrorBody, Result};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Request, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::http::HttpClient;
use crate::pipeline::Pipeline;

use super::resource::{HalResource, MediaTyped};

/// Client for HAL resources.
///
/// Cheap to clone; clones share the transport and pipeline. Every resource
/// returned by a verb method carries a clone as its back-reference for
/// relation-based follow-up requests.
#[derive(Clone)]
pub struct HalClient {
    http: HttpClient,
    pipeline: Arc<Pipeline>,
}

impl HalClient {
    pub fn new(http: HttpClient, pipeline: Arc<Pipeline>) -> Self {
        Self { http, pipeline }
    }

    /// Fetch a resource.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get<T: HalResource>(&self, url: Url) -> Result<T> {
        let request = self.build_request(Method::GET, &url, T::media_type())?;
        self.dispatch(request).await
    }

    /// Fetch only the headers of a resource.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn head<T: HalResource>(&self, url: Url) -> Result<HeaderMap> {
        let request = self.build_request(Method::HEAD, &url, T::media_type())?;
        let response = self.pipeline.execute(&self.http, request).await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &headers, body));
        }
        Ok(response.headers().clone())
    }

    /// Create a resource.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn post<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: HalResource,
        B: MediaTyped + Serialize,
    {
        let request = self.build_request_with_body(Method::POST, &url, T::media_type(), body)?;
        self.dispatch(request).await
    }

    /// Replace a resource.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn put<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: HalResource,
        B: MediaTyped + Serialize,
    {
        let request = self.build_request_with_body(Method::PUT, &url, T::media_type(), body)?;
        self.dispatch(request).await
    }

    /// Apply a patch document to a resource.
    #[instrument(skip(self, body), fields(url = %url))]
    pub async fn patch<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: HalResource,
        B: MediaTyped + Serialize,
    {
        let request = self.build_request_with_body(Method::PATCH, &url, T::media_type(), body)?;
        self.dispatch(request).await
    }

    fn build_request(&self, method: Method, url: &Url, accept: &'static str) -> Result<Request> {
        self.http
            .request(method, url.clone())
            .header(ACCEPT, accept)
            .build()
            .map_err(|err| AdPostingError::Network(format!("invalid HTTP request: {err}")))
    }

    fn build_request_with_body<B>(
        &self,
        method: Method,
        url: &Url,
        accept: &'static str,
        body: &B,
    ) -> Result<Request>
    where
        B: MediaTyped + Serialize,
    {
        let bytes = serde_json::to_vec(body)?;
        self.http
            .request(method, url.clone())
            .header(ACCEPT, accept)
            .header(CONTENT_TYPE, B::media_type())
            .body(bytes)
            .build()
            .map_err(|err| AdPostingError::Network(format!("invalid HTTP request: {err}")))
    }

    async fn dispatch<T: HalResource>(&self, request: Request) -> Result<T> {
        let response = self.pipeline.execute(&self.http, request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        // The final URL is the base for resolving this resource's links.
        let base = response.url().clone();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &headers, body));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AdPostingError::Network(format!("failed to read body: {err}")))?;

        let mut resource: T = serde_json::from_str(&body).map_err(|err| {
            AdPostingError::Serialization(format!("failed to parse response body: {err}"))
        })?;

        resource.attach_transport(self, &base);
        resource.absorb_headers(&headers);

        debug!(%status, uri = ?resource.uri(), "resource fetched");
        Ok(resource)
    }
}

/// Map a non-2xx response into the error taxonomy.
///
/// This table is the single dispatch point for status codes; anything not
/// covered falls through to `RequestFailed` with the raw body preserved.
/// Error-body parsing failures degrade to the less specific kind rather
/// than masking the HTTP failure.
pub(crate) fn error_from_response(
    status: StatusCode,
    headers: &HeaderMap,
    body: String,
) -> AdPostingError {
    let request_id = header_value(headers, HEADER_REQUEST_ID);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let parsed = serde_json::from_str::<ErrorBody>(&body).ok();
            AdPostingError::Unauthorized { request_id, body: parsed }
        }
        StatusCode::NOT_FOUND => AdPostingError::NotFound { request_id },
        StatusCode::CONFLICT => match header_value(headers, HEADER_LOCATION)
            .and_then(|raw| Url::parse(&raw).ok())
        {
            Some(location) => AdPostingError::AlreadyExists { request_id, location },
            None => {
                warn!("409 response carried no usable Location header");
                AdPostingError::RequestFailed { status: status.as_u16(), body, request_id }
            }
        },
        StatusCode::UNPROCESSABLE_ENTITY => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => AdPostingError::Validation {
                request_id,
                message: parsed.message,
                errors: parsed.errors,
            },
            Err(_) => {
                AdPostingError::RequestFailed { status: status.as_u16(), body, request_id }
            }
        },
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after =
                header_value(headers, HEADER_RETRY_AFTER).and_then(|raw| parse_retry_after(&raw));
            AdPostingError::TooManyRequests { request_id, retry_after }
        }
        _ => AdPostingError::RequestFailed { status: status.as_u16(), body, request_id },
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_owned)
}

/// `Retry-After` arrives either as delta-seconds or as an HTTP date
/// (RFC 7231 §7.1.3). A date already in the past yields no hint.
fn parse_retry_after(raw: &str) -> Option<Duration> {
    if let Ok(seconds) = raw.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }
    let date = DateTime::parse_from_rfc2822(raw).ok()?;
    date.signed_duration_since(Utc::now()).to_std().ok()
}
