use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use backend::{nasa::NasaClient, server, state::AppState};
use tower::ServiceExt;
use wiremock::MockServer;

/// Credential wired into the test client; asserted on outbound calls
pub const TEST_API_KEY: &str = "test-key";

/// Setup tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Base test setup: the full application router wired to a mock upstream
pub struct TestSetup {
    pub router: Router,
    pub mock_server: MockServer,
}

impl TestSetup {
    /// Router whose upstream client points at a fresh mock server
    pub async fn new() -> Self {
        setup_test_env();

        let mock_server = MockServer::start().await;
        let router = build_router(&mock_server.uri(), TEST_API_KEY);

        Self {
            router,
            mock_server,
        }
    }

    /// Router whose upstream points at a port nothing listens on, so every
    /// outbound call fails at the transport layer
    pub async fn with_unreachable_upstream() -> Self {
        setup_test_env();

        let mock_server = MockServer::start().await;
        let router = build_router("http://127.0.0.1:9", TEST_API_KEY);

        Self {
            router,
            mock_server,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn parse_response_body(
        &self,
        response: Response,
    ) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        use http_body_util::BodyExt;

        let body = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&body)?;
        Ok(json)
    }
}

/// Builds the application router around a client for the given upstream
pub fn build_router(base_url: &str, api_key: &str) -> Router {
    let nasa = Arc::new(NasaClient::new(base_url.to_string(), api_key.to_string()));
    server::router(AppState { nasa })
}
