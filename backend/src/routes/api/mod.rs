pub mod apod;
pub mod earth_imagery;
pub mod mars_photos;
pub mod neo;
pub mod rovers;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Creates the proxy router with one route per upstream operation
pub fn handler() -> Router<AppState> {
    Router::new()
        .route("/apod", get(apod::get_apod))
        .route("/mars-photos", get(mars_photos::get_mars_photos))
        .route("/neo", get(neo::get_neo))
        .route("/earth-imagery", get(earth_imagery::get_earth_imagery))
        .route("/rovers", get(rovers::get_rovers))
}
