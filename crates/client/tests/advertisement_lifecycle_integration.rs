//! End-to-end advertisement lifecycle against a mock API.
//!
//! Covers create, fetch, replace and expire, asserting the vendor media
//! types on Accept/Content-Type, bearer authorization, and the deprecated
//! `Processing-Status` response header.

#[path = "support.rs"]
mod support;

use adposting_client::domain::constants::{
    MEDIA_TYPE_ADVERTISEMENT, MEDIA_TYPE_ADVERTISEMENT_PATCH,
};
use adposting_client::domain::{AdvertisementState, ProcessingStatus};
use adposting_client::testing::{AdvertisementBuilder, DocumentBuilder};
use adposting_client::HalResource;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_fetch_save_and_expire_an_advertisement() {
    let (server, client) = support::start().await;
    support::mount_index(&server).await;
    let base = server.uri();

    let advertisement = AdvertisementBuilder::new().job_title("Staff Engineer").build();
    let open_body = DocumentBuilder::from_value(&advertisement)
        .set("id", "adv-1")
        .set("state", "Open")
        .link("self", format!("{base}/advertisement/adv-1"), false)
        .build();

    Mock::given(method("POST"))
        .and(path("/advertisement"))
        .and(header("Accept", MEDIA_TYPE_ADVERTISEMENT))
        .and(header("Content-Type", MEDIA_TYPE_ADVERTISEMENT))
        .and(header("Authorization", format!("Bearer {}", support::ACCESS_TOKEN).as_str()))
        .and(body_partial_json(json!({ "jobTitle": "Staff Engineer" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(open_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.create_advertisement(&advertisement).await.unwrap();
    assert_eq!(created.content.id.as_deref(), Some("adv-1"));
    assert_eq!(created.content.state, Some(AdvertisementState::Open));
    assert_eq!(created.content.without_server_fields(), advertisement);
    assert_eq!(created.uri().unwrap().as_str(), format!("{base}/advertisement/adv-1"));

    // Fetch by identifier: the templated `advertisement` relation resolves
    // to the concrete path.
    Mock::given(method("GET"))
        .and(path("/advertisement/adv-1"))
        .and(header("Accept", MEDIA_TYPE_ADVERTISEMENT))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("Processing-Status", "Completed")
                .set_body_json(open_body.clone()),
        )
        .mount(&server)
        .await;

    let fetched = client.get_advertisement("adv-1").await.unwrap();
    assert_eq!(fetched.content.job_title, "Staff Engineer");
    assert_eq!(fetched.processing_status(), Some(ProcessingStatus::Completed));

    // Replace through the resource's own self link.
    let updated = AdvertisementBuilder::new().job_title("Principal Engineer").build();
    let updated_body = DocumentBuilder::from_value(&updated)
        .set("id", "adv-1")
        .set("state", "Open")
        .link("self", format!("{base}/advertisement/adv-1"), false)
        .build();

    Mock::given(method("PUT"))
        .and(path("/advertisement/adv-1"))
        .and(header("Content-Type", MEDIA_TYPE_ADVERTISEMENT))
        .and(body_partial_json(json!({ "jobTitle": "Principal Engineer" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated_body))
        .expect(1)
        .mount(&server)
        .await;

    let saved = fetched.save(&updated).await.unwrap();
    assert_eq!(saved.content.job_title, "Principal Engineer");

    // Expire with the patch document media type and exact body.
    let expired_body = DocumentBuilder::from_value(&updated)
        .set("id", "adv-1")
        .set("state", "Expired")
        .link("self", format!("{base}/advertisement/adv-1"), false)
        .build();

    Mock::given(method("PATCH"))
        .and(path("/advertisement/adv-1"))
        .and(header("Accept", MEDIA_TYPE_ADVERTISEMENT))
        .and(header("Content-Type", MEDIA_TYPE_ADVERTISEMENT_PATCH))
        .and(body_json(json!({ "state": "Expired" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(expired_body))
        .expect(1)
        .mount(&server)
        .await;

    let expired = saved.expire().await.unwrap();
    assert_eq!(expired.content.state, Some(AdvertisementState::Expired));
}

#[tokio::test]
async fn facade_operations_accept_pre_resolved_urls() {
    let (server, client) = support::start().await;
    let base = server.uri();
    let url = Url::parse(&format!("{base}/advertisement/adv-7")).unwrap();

    let advertisement = AdvertisementBuilder::new().build();
    let body = DocumentBuilder::from_value(&advertisement)
        .set("id", "adv-7")
        .set("state", "Open")
        .link("self", format!("{base}/advertisement/adv-7"), false)
        .build();

    // No index mock: URL-based operations must not bootstrap the index.
    Mock::given(method("GET"))
        .and(path("/advertisement/adv-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/advertisement/adv-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/advertisement/adv-7"))
        .and(body_json(json!({ "state": "Expired" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            DocumentBuilder::from_value(&advertisement)
                .set("id", "adv-7")
                .set("state", "Expired")
                .link("self", format!("{base}/advertisement/adv-7"), false)
                .build(),
        ))
        .mount(&server)
        .await;

    let fetched = client.get_advertisement_at(url.clone()).await.unwrap();
    assert_eq!(fetched.content.id.as_deref(), Some("adv-7"));

    let saved = client.update_advertisement(url.clone(), &advertisement).await.unwrap();
    assert_eq!(saved.content.state, Some(AdvertisementState::Open));

    let expired = client.expire_advertisement(url).await.unwrap();
    assert_eq!(expired.content.state, Some(AdvertisementState::Expired));
}
