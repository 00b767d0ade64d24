use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.status())
}

/// Remote-preferred reload of every collection.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    info!("Manual catalog refresh requested");
    state.catalog.refresh(true).await?;
    Ok(Json(state.catalog.status()))
}
