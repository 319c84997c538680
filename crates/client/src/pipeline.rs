//! Ordered request-processing pipeline.
//!
//! Outbound requests pass through an ordered list of [`RequestStage`]s:
//! each stage may mutate the request before it is sent and may inspect the
//! response to signal a single resend. The facade composes the pipeline at
//! construction time (user-agent stamping first, then bearer auth).

use std::sync::Arc;

use adposting_domain::{AdPostingError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Request, Response, StatusCode};
use tracing::warn;

use crate::auth::AccessTokenProvider;
use crate::http::HttpClient;

/// What a stage wants done with the response.
pub enum ResponseAction {
    Proceed,
    /// Resend the request once more. Honored at most once per request.
    RetryOnce,
}

/// A composable request-processing stage.
#[async_trait]
pub trait RequestStage: Send + Sync {
    /// Mutate the outgoing request. Runs again before the retry, so state
    /// changed by `on_response` (e.g. a refreshed token) is picked up.
    async fn prepare(&self, request: &mut Request) -> Result<()>;

    /// Inspect the response after send. The default proceeds.
    async fn on_response(&self, _response: &Response) -> Result<ResponseAction> {
        Ok(ResponseAction::Proceed)
    }
}

/// Executes stages in order around a buffered request, resending at most
/// once when a stage asks for it.
pub struct Pipeline {
    stages: Vec<Box<dyn RequestStage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn RequestStage>>) -> Self {
        Self { stages }
    }

    pub async fn execute(&self, http: &HttpClient, request: Request) -> Result<Response> {
        let mut retried = false;

        loop {
            let mut attempt = request.try_clone().ok_or_else(|| {
                AdPostingError::Internal(
                    "request body cannot be cloned; buffer the body to enable the reauth retry"
                        .into(),
                )
            })?;

            for stage in &self.stages {
                stage.prepare(&mut attempt).await?;
            }

            let response = http.execute(attempt).await?;

            if !retried {
                let mut retry = false;
                for stage in &self.stages {
                    if matches!(stage.on_response(&response).await?, ResponseAction::RetryOnce) {
                        retry = true;
                    }
                }
                if retry {
                    retried = true;
                    continue;
                }
            }

            // A second failure is surfaced as-is; no further retries.
            return Ok(response);
        }
    }
}

/// Stamps every outgoing request with the product identifier and version.
pub struct UserAgentStage {
    value: HeaderValue,
}

impl Default for UserAgentStage {
    fn default() -> Self {
        Self {
            value: HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        }
    }
}

#[async_trait]
impl RequestStage for UserAgentStage {
    async fn prepare(&self, request: &mut Request) -> Result<()> {
        request.headers_mut().insert(USER_AGENT, self.value.clone());
        Ok(())
    }
}

/// Attaches the current bearer token; on a 401 refreshes the token once and
/// asks the pipeline to resend.
///
/// Refresh is not synchronized across concurrent in-flight requests:
/// each 401 triggers its own refresh and the last token written wins, which
/// is safe because any valid token is usable.
pub struct BearerAuthStage {
    provider: Arc<dyn AccessTokenProvider>,
}

impl BearerAuthStage {
    pub fn new(provider: Arc<dyn AccessTokenProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RequestStage for BearerAuthStage {
    async fn prepare(&self, request: &mut Request) -> Result<()> {
        let token = self.provider.access_token().await?;
        let header = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AdPostingError::Internal("access token is not header-safe".into()))?;
        request.headers_mut().insert(AUTHORIZATION, header);
        Ok(())
    }

    async fn on_response(&self, response: &Response) -> Result<ResponseAction> {
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("request was rejected with 401; refreshing access token and retrying once");
            self.provider.refresh_token().await?;
            return Ok(ResponseAction::RetryOnce);
        }
        Ok(ResponseAction::Proceed)
    }
}
