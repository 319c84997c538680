//! Client configuration and environment presets.

use std::time::Duration;

use adposting_domain::{AdPostingError, Result};
use url::Url;

/// Deployment environment the client talks to.
///
/// Each environment fixes the API entry point (the index resource URL) and
/// the OAuth2 token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub fn api_url(&self) -> Url {
        let raw = match self {
            Self::Production => "https://api.adposting.com/",
            Self::Sandbox => "https://api.sandbox.adposting.com/",
        };
        // Compile-time constants; parsing cannot fail.
        Url::parse(raw).expect("environment API URL is valid")
    }

    pub fn token_url(&self) -> Url {
        let raw = match self {
            Self::Production => "https://auth.adposting.com/auth/oauth2/token",
            Self::Sandbox => "https://auth.sandbox.adposting.com/auth/oauth2/token",
        };
        Url::parse(raw).expect("environment token URL is valid")
    }
}

/// Configuration for the facade [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the index resource (API entry point).
    pub api_url: Url,
    /// OAuth2 token endpoint.
    pub token_url: Url,
    pub client_id: String,
    pub client_secret: String,
    /// Transport-level request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    environment: Option<Environment>,
    api_url: Option<Url>,
    token_url: Option<Url>,
    client_id: Option<String>,
    client_secret: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Use an environment's preset URLs. Explicit URL overrides win.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn token_url(mut self, token_url: Url) -> Self {
        self.token_url = Some(token_url);
        self
    }

    pub fn credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let api_url = self
            .api_url
            .or_else(|| self.environment.map(|env| env.api_url()))
            .ok_or_else(|| {
                AdPostingError::Configuration("api_url or environment is required".into())
            })?;
        let token_url = self
            .token_url
            .or_else(|| self.environment.map(|env| env.token_url()))
            .ok_or_else(|| {
                AdPostingError::Configuration("token_url or environment is required".into())
            })?;
        let client_id = self
            .client_id
            .ok_or_else(|| AdPostingError::Configuration("client_id is required".into()))?;
        let client_secret = self
            .client_secret
            .ok_or_else(|| AdPostingError::Configuration("client_secret is required".into()))?;

        Ok(ClientConfig {
            api_url,
            token_url,
            client_id,
            client_secret,
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        })
    }
}
