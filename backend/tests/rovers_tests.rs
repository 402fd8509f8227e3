mod common;

use common::TestSetup;
use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_rovers_unwraps_rover_list() {
    let context = TestSetup::new().await;

    let rovers = json!([
        { "name": "Curiosity", "status": "active", "landing_date": "2012-08-06" },
        { "name": "Opportunity", "status": "complete", "landing_date": "2004-01-25" },
    ]);

    Mock::given(method("GET"))
        .and(path("/mars-photos/api/v1/rovers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rovers": rovers.clone() })))
        .expect(1)
        .mount(&context.mock_server)
        .await;

    let response = context
        .send_get_request("/api/rovers")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = context
        .parse_response_body(response)
        .await
        .expect("Failed to parse response");

    assert_eq!(body, rovers);
}

#[tokio::test]
async fn test_rovers_upstream_error_becomes_envelope_failure() {
    let context = TestSetup::new().await;

    Mock::given(method("GET"))
        .and(path("/mars-photos/api/v1/rovers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&context.mock_server)
        .await;

    let response = context
        .send_get_request("/api/rovers")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = context
        .parse_response_body(response)
        .await
        .expect("Failed to parse response");

    assert_eq!(body["error"], "Failed to fetch rovers information");
    assert_eq!(body["details"], "Service Unavailable");
}
