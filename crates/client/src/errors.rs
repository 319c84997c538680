//! Conversions from transport errors into the domain error taxonomy.
//!
//! Status-code dispatch for non-2xx responses lives in [`crate::hal`]; this
//! module only classifies failures that happen before a response exists
//! (connect errors, timeouts, request building).

use adposting_domain::AdPostingError;
use reqwest::Error as HttpError;

/// Extension trait to make the conversion logic explicit in tests and
/// within this crate.
pub(crate) trait IntoAdPostingError {
    fn into_adposting(self) -> AdPostingError;
}

impl IntoAdPostingError for HttpError {
    fn into_adposting(self) -> AdPostingError {
        if self.is_timeout() {
            return AdPostingError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AdPostingError::Network("HTTP connection failure".into());
        }

        if self.is_builder() || self.is_request() {
            return AdPostingError::Network(format!("invalid HTTP request: {self}"));
        }

        AdPostingError::Network(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Client;

    use super::*;

    #[tokio::test]
    async fn connection_failure_maps_to_network_error() {
        // Port 9 (discard) is not listening in the test environment.
        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get("http://127.0.0.1:9/").send().await.unwrap_err();

        match error.into_adposting() {
            AdPostingError::Network(msg) => {
                assert!(msg.to_lowercase().contains("connection") || msg.contains("http"));
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
