use axum::{extract::State, Json};
use serde_json::Value;
use tracing::instrument;

use crate::{state::AppState, types::AppError};

/// `GET /api/rovers` - known rovers and their status metadata
#[instrument(skip(state))]
pub async fn get_rovers(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let rovers = state.nasa.rovers().await?;

    Ok(Json(rovers))
}
