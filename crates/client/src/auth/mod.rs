//! OAuth2 client-credentials authentication.

pub mod provider;
pub mod token;

pub use provider::{AccessTokenProvider, ClientCredentialsProvider};
pub use token::OAuth2Token;
