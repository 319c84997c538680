//! OAuth2 token response shape.

use serde::Deserialize;

/// Bearer token as returned by the token endpoint.
///
/// `expires_in` is informational only: the client never expires tokens
/// proactively; refresh happens reactively after a 401.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuth2Token {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}
