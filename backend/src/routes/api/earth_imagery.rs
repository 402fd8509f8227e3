use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{nasa::EarthImagery, state::AppState, types::AppError};

/// Tile width/height in decimal degrees applied when the caller omits `dim`
const DEFAULT_DIM: f64 = 0.12;

#[derive(Debug, Deserialize)]
pub struct EarthImageryParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub date: Option<String>,
    pub dim: Option<f64>,
}

/// `GET /api/earth-imagery` - resolved satellite tile URL for a location.
///
/// `lat`, `lon` and `date` are required; a missing one short-circuits with
/// 400 before any outbound call is made. `dim` defaults here.
#[instrument(skip(state))]
pub async fn get_earth_imagery(
    State(state): State<AppState>,
    Query(params): Query<EarthImageryParams>,
) -> Result<Json<EarthImagery>, AppError> {
    let (Some(lat), Some(lon), Some(date)) = (params.lat, params.lon, params.date.as_deref())
    else {
        return Err(AppError::missing_params("lat, lon, and date are required"));
    };

    let dim = params.dim.unwrap_or(DEFAULT_DIM);

    let imagery = state.nasa.earth_imagery(lat, lon, date, dim).await?;

    Ok(Json(imagery))
}
