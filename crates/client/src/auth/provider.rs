//! Token acquisition via the client-credentials grant.

use adposting_domain::constants::HEADER_REQUEST_ID;
use adposting_domain::{AdPostingError, Result};
use async_trait::async_trait;
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

use crate::http::HttpClient;

use super::token::OAuth2Token;

/// Provides bearer tokens for API calls.
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current token, fetching one if none is cached yet.
    async fn access_token(&self) -> Result<String>;

    /// Discard the cached token and fetch a fresh one. Called by the auth
    /// stage after a 401.
    async fn refresh_token(&self) -> Result<String>;
}

/// OAuth2 client-credentials provider against a fixed token endpoint.
///
/// Caches the current token; no expiry tracking. Concurrent refreshes are
/// not mutually excluded — the latest token written wins.
pub struct ClientCredentialsProvider {
    http: HttpClient,
    token_url: Url,
    client_id: String,
    client_secret: String,
    current: RwLock<Option<OAuth2Token>>,
}

impl ClientCredentialsProvider {
    pub fn new(
        http: HttpClient,
        token_url: Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            current: RwLock::new(None),
        }
    }

    async fn fetch_token(&self) -> Result<OAuth2Token> {
        debug!(url = %self.token_url, "requesting access token");

        let request = self
            .http
            .request(Method::POST, self.token_url.clone())
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .build()
            .map_err(|err| AdPostingError::Network(format!("invalid token request: {err}")))?;

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let request_id = response
                .headers()
                .get(HEADER_REQUEST_ID)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await.unwrap_or_default();

            return Err(if status == reqwest::StatusCode::UNAUTHORIZED {
                AdPostingError::Unauthorized { request_id, body: None }
            } else {
                AdPostingError::RequestFailed { status: status.as_u16(), body, request_id }
            });
        }

        let token: OAuth2Token = response
            .json()
            .await
            .map_err(|err| AdPostingError::Serialization(format!("invalid token body: {err}")))?;

        info!("obtained access token");
        Ok(token)
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsProvider {
    async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.current.read().await.as_ref() {
            return Ok(token.access_token.clone());
        }
        self.refresh_token().await
    }

    async fn refresh_token(&self) -> Result<String> {
        let token = self.fetch_token().await?;
        let access_token = token.access_token.clone();
        *self.current.write().await = Some(token);
        Ok(access_token)
    }
}
