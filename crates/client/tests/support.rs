//! Shared wiremock harness for the integration tests.
//!
//! Mounts the OAuth2 token endpoint and a default index document so each
//! test only declares the resource mocks it cares about.

#![allow(dead_code)]

use adposting_client::{Client, ClientConfig};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/auth/oauth2/token";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Start a mock server with a working token endpoint and build a client
/// pointed at it.
pub async fn start() -> (MockServer, Client) {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;
    let client = build_client(&server);
    (server, client)
}

/// Build a client whose index and token URLs both point at the server.
pub fn build_client(server: &MockServer) -> Client {
    let api_url = Url::parse(&format!("{}/", server.uri())).unwrap();
    let token_url = Url::parse(&format!("{}{}", server.uri(), TOKEN_PATH)).unwrap();
    let config = ClientConfig::builder()
        .api_url(api_url)
        .token_url(token_url)
        .credentials("client-id", "client-secret")
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

/// A successful client-credentials token response.
pub fn token_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
}

pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(token_response())
        .mount(server)
        .await;
}

/// The default index document: direct `advertisements` link plus templated
/// drill-down and listing links.
pub fn index_body(base: &str) -> serde_json::Value {
    json!({
        "_links": {
            "advertisements": {
                "href": format!("{base}/advertisement")
            },
            "advertisement": {
                "href": format!("{base}/advertisement/{{advertisementId}}"),
                "templated": true
            },
            "templates": {
                "href": format!("{base}/template{{?advertiserId,after}}"),
                "templated": true
            },
            "logos": {
                "href": format!("{base}/logo{{?advertiserId}}"),
                "templated": true
            }
        }
    })
}

pub async fn mount_index(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(index_body(&server.uri())))
        .mount(server)
        .await;
}
