use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Issue a GET against a router built outside of `TestSetup`
pub async fn oneshot_get(router: &Router, route: &str) -> Response {
    let request = Request::builder()
        .uri(route)
        .method("GET")
        .body(Body::empty())
        .expect("Failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request")
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
