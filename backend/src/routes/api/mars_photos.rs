use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{nasa::MarsPhotosPage, state::AppState, types::AppError};

/// Rover queried when the caller does not name one
const DEFAULT_ROVER: &str = "curiosity";

/// Martian day queried when the caller does not provide one
const DEFAULT_SOL: u32 = 1000;

#[derive(Debug, Deserialize)]
pub struct MarsPhotosParams {
    pub rover: Option<String>,
    pub sol: Option<u32>,
    pub camera: Option<String>,
}

/// `GET /api/mars-photos` - truncated page of rover photos.
///
/// Defaults are resolved here, not in the client, so this layer stays the
/// single source of truth for them.
#[instrument(skip(state))]
pub async fn get_mars_photos(
    State(state): State<AppState>,
    Query(params): Query<MarsPhotosParams>,
) -> Result<Json<MarsPhotosPage>, AppError> {
    let rover = params.rover.as_deref().unwrap_or(DEFAULT_ROVER);
    let sol = params.sol.unwrap_or(DEFAULT_SOL);

    let page = state
        .nasa
        .mars_rover_photos(rover, sol, params.camera.as_deref())
        .await?;

    Ok(Json(page))
}
