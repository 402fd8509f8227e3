use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{state::AppState, types::AppError};

#[derive(Debug, Deserialize)]
pub struct NeoParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `GET /api/neo` - near-earth object feed for a date range.
///
/// Both dates are required; a missing one short-circuits with 400 before
/// any outbound call is made.
#[instrument(skip(state))]
pub async fn get_neo(
    State(state): State<AppState>,
    Query(params): Query<NeoParams>,
) -> Result<Json<Value>, AppError> {
    let (Some(start_date), Some(end_date)) =
        (params.start_date.as_deref(), params.end_date.as_deref())
    else {
        return Err(AppError::missing_params(
            "start_date and end_date are required",
        ));
    };

    let data = state.nasa.near_earth_objects(start_date, end_date).await?;

    Ok(Json(data))
}
