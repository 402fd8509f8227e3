use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{state::AppState, types::AppError};

#[derive(Debug, Deserialize)]
pub struct ApodParams {
    /// Calendar date (YYYY-MM-DD); omitted means the latest entry
    pub date: Option<String>,
}

/// `GET /api/apod` - Astronomy Picture of the Day, passed through verbatim
#[instrument(skip(state))]
pub async fn get_apod(
    State(state): State<AppState>,
    Query(params): Query<ApodParams>,
) -> Result<Json<Value>, AppError> {
    let data = state.nasa.apod(params.date.as_deref()).await?;

    Ok(Json(data))
}
