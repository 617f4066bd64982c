//! Integration tests for the organization endpoints
//!
//! **Coverage:**
//! - Fixture payload mapped field by field
//! - Sub-organization listing
//! - Creation: empty `fail_results` succeeds, first failure message only
//! - 401 handling and its log label

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use ppe_domain::{NewOrganization, NewUser, Organization};
use ppe_infra::api::{ApiError, PASSWORD_HEADER, USER_HEADER};
use serde_json::json;
use support::{mock_api, org_fixture, two_failures, CapturedLogs, API_PASSWORD, API_USER};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn new_org() -> NewOrganization {
    NewOrganization::new(
        "Child Ltd",
        "child.example.com",
        NewUser::new("admin@child.example.com", "organization_admin"),
    )
}

#[tokio::test]
async fn fetch_organization_maps_every_field() {
    let (server, client) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/example.com"))
        .and(header(USER_HEADER, API_USER))
        .and(header(PASSWORD_HEADER, API_PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let org = client.organization("example.com").await.unwrap();

    assert_eq!(org.name, "Example Ltd");
    assert_eq!(org.primary_domain, "example.com");
    assert_eq!(org.org_type, "customer");
    assert_eq!(org.user_licenses, 50);
    assert_eq!(org.active_users, 42);
    assert_eq!(org.licensing_package, "business");
    assert!(!org.on_trial);
    assert_eq!(org.when_renewal, "2027-01-01");
    assert_eq!(org.www, "https://www.example.com");
    assert_eq!(org.address, "1 Main Street");
    assert_eq!(org.postcode, "AB1 2CD");
    assert_eq!(org.country, "GB");
    assert_eq!(org.phone, "+44 20 7946 0000");
    assert_eq!(org.outgoing_servers, ["203.0.113.10"]);
    assert_eq!(org.white_list_senders, ["partner@trusted.com"]);
    assert_eq!(org.black_list_senders, ["spam@bad.example"]);
    assert!(org.active);
    assert_eq!(org.domain_names(), ["example.com", "example.org"]);

    let admin = org.admin_user.as_ref().expect("admin user should be mapped");
    assert_eq!(admin.email, "admin@example.com");
    assert_eq!(admin.organization, "example.com");
    assert!(admin.active);
}

#[tokio::test]
async fn list_sub_organizations_maps_each_element() {
    let (server, client) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/example.com/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "primary_domain": "one.example.com", "name": "One", "domains": [{ "name": "one.example.com" }] },
            { "primary_domain": "two.example.com", "name": "Two", "isactive": 0 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let parent = Organization::new("Example Ltd", "example.com");
    let orgs = client.organizations(&parent).await.unwrap();

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].primary_domain, "one.example.com");
    assert_eq!(orgs[0].domain_names(), ["one.example.com"]);
    assert_eq!(orgs[1].name, "Two");
    assert!(orgs[1].domain_names().is_empty());
    assert!(!orgs[1].active);
}

#[tokio::test]
async fn create_organization_posts_single_element_list() {
    let (server, client) = mock_api().await;
    let new_org = new_org();

    Mock::given(method("POST"))
        .and(path("/api/orgs/example.com/orgs"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!([serde_json::to_value(&new_org).unwrap()])))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "created": 0, "fail_results": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let parent = Organization::new("Example Ltd", "example.com");
    client.create_organization(&parent, &new_org).await.unwrap();
}

#[tokio::test]
async fn create_organization_keeps_first_failure_only() {
    let (server, client) = mock_api().await;

    Mock::given(method("POST"))
        .and(path("/api/orgs/example.com/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_failures()))
        .mount(&server)
        .await;

    let parent = Organization::new("Example Ltd", "example.com");
    let err = client.create_organization(&parent, &new_org()).await.unwrap_err();

    match err {
        ApiError::Rejected(message) => assert_eq!(message, "Already exists"),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn create_organization_validates_before_sending() {
    let (server, client) = mock_api().await;

    let parent = Organization::new("Example Ltd", "example.com");
    let invalid = NewOrganization::new("", "child.example.com", NewUser::default());
    let err = client.create_organization(&parent, &invalid).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_organization_fetch() {
    let (server, client) = mock_api().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.organization("example.com").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn null_sub_organization_listing_is_empty() {
    let (server, client) = mock_api().await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/example.com/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&server)
        .await;

    let parent = Organization::new("Example Ltd", "example.com");
    let orgs = client.organizations(&parent).await.unwrap();
    assert!(orgs.is_empty());
}

#[tokio::test]
async fn unauthorized_is_logged_with_its_category() {
    let (server, client) = mock_api().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (logs, _guard) = CapturedLogs::install();
    let result = client.organization("example.com").await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    let output = logs.contents();
    assert!(output.contains("API rejected credentials"), "logs: {output}");
    assert!(output.contains(r#"category="authorization""#), "logs: {output}");
    assert!(!output.contains(API_PASSWORD), "password leaked into logs: {output}");
}
