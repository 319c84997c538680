//! Server-driven pagination over the listing resources.
//!
//! The server controls page boundaries through the `next` relation; the
//! client never constructs page URLs itself.

#[path = "support.rs"]
mod support;

use adposting_client::domain::constants::MEDIA_TYPE_ADVERTISEMENT_LIST;
use adposting_client::domain::AdPostingError;
use adposting_client::{LogoListQuery, Paginated, TemplateListQuery};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn summary(job_title: &str, base: &str, id: &str) -> serde_json::Value {
    json!({
        "advertiserId": "9012",
        "jobTitle": job_title,
        "_links": {
            "self": { "href": format!("{base}/advertisement/{id}") },
            "view": { "href": format!("{base}/advertisement/{id}/view") }
        }
    })
}

#[tokio::test]
async fn walks_advertisement_pages_until_the_server_stops_linking_next() {
    let (server, client) = support::start().await;
    support::mount_index(&server).await;
    let base = server.uri();

    // The last page has no `next` relation. Mounted first so the unqualified
    // first-page mock cannot shadow it.
    Mock::given(method("GET"))
        .and(path("/advertisement"))
        .and(query_param("after", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "advertisements": [summary("Data Engineer", &base, "adv-3")]
            },
            "_links": {
                "self": { "href": format!("{base}/advertisement?after=2") }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/advertisement"))
        .and(query_param_is_missing("after"))
        .and(header("Accept", MEDIA_TYPE_ADVERTISEMENT_LIST))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "advertisements": [
                    summary("Senior Developer", &base, "adv-1"),
                    summary("Staff Engineer", &base, "adv-2"),
                ]
            },
            "_links": {
                "self": { "href": format!("{base}/advertisement") },
                "next": { "href": format!("{base}/advertisement?after=2") }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let first = client.get_all_advertisements().await.unwrap();
    assert_eq!(first.advertisements().len(), 2);
    assert!(!first.eof());

    let entry = &first.advertisements()[0];
    assert_eq!(entry.content.job_title, "Senior Developer");
    assert_eq!(entry.uri().unwrap().as_str(), format!("{base}/advertisement/adv-1"));
    assert_eq!(entry.view_url().unwrap().as_str(), format!("{base}/advertisement/adv-1/view"));

    let second = first.next_page().await.unwrap();
    assert_eq!(second.advertisements().len(), 1);
    assert!(second.eof());

    let exhausted = second.next_page().await;
    assert!(matches!(exhausted, Err(AdPostingError::NoMoreResults)));
}

#[tokio::test]
async fn template_query_parameters_expand_into_the_templated_link() {
    let (server, client) = support::start().await;
    support::mount_index(&server).await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/template"))
        .and(query_param("advertiserId", "9012"))
        .and(query_param("after", "cursor 42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "templates": [
                    { "id": "tpl-1", "advertiserId": "9012", "name": "Branded", "state": "Active" }
                ]
            },
            "_links": {
                "self": { "href": format!("{base}/template?advertiserId=9012&after=cursor%2042") }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = TemplateListQuery {
        advertiser_id: Some("9012".into()),
        after: Some("cursor 42".into()),
    };
    let templates = client.get_templates(&query).await.unwrap();
    assert_eq!(templates.templates().len(), 1);
    assert_eq!(templates.templates()[0].id, "tpl-1");
    assert!(templates.eof());
}

#[tokio::test]
async fn omitted_query_parameters_drop_the_query_string_entirely() {
    let (server, client) = support::start().await;
    support::mount_index(&server).await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/logo"))
        .and(query_param_is_missing("advertiserId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": { "logos": [] },
            "_links": { "self": { "href": format!("{base}/logo") } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let logos = client.get_logos(&LogoListQuery::default()).await.unwrap();
    assert!(logos.logos().is_empty());
    assert!(logos.eof());
}
