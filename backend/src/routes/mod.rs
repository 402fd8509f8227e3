mod api;
mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Creates the router with all handler routes
pub fn handler() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        .nest("/api", api::handler())
}
