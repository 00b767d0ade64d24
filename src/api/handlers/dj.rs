use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::{requests::CreateDjRequest, responses::DjResponse};
use crate::domain::models::dj::{Dj, DjPatch};
use crate::domain::models::moderation::ModerationStatus;
use crate::domain::models::user::ADMIN_USER_ID;
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_dj(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDjRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let now = Utc::now();
    let dj = Dj {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: payload.description,
        status: ModerationStatus::Pending.as_str().to_string(),
        submitted_by: payload
            .submitted_by
            .unwrap_or_else(|| ADMIN_USER_ID.to_string()),
        photo_url: payload.photo_url,
        bio: payload.bio,
        genres_json: serde_json::to_string(&payload.genres.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid genres".into()))?,
        social_links_json: serde_json::to_string(&payload.social_links.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid social_links".into()))?,
        created_at: now,
        updated_at: now,
    };

    let created = state.catalog.add_dj(dj).await?;
    info!("Created DJ: {} ({})", created.slug, created.id);
    Ok(Json(DjResponse::from(created)))
}

pub async fn list_djs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let djs: Vec<DjResponse> = state
        .catalog
        .djs()
        .into_iter()
        .map(DjResponse::from)
        .collect();
    Json(djs)
}

pub async fn get_dj(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dj = state
        .catalog
        .find_dj_by_id(&id)
        .ok_or_else(|| AppError::NotFound("DJ not found".into()))?;
    Ok(Json(DjResponse::from(dj)))
}

pub async fn get_dj_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dj = state
        .catalog
        .find_dj_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("DJ '{}' not found", slug)))?;
    Ok(Json(DjResponse::from(dj)))
}

pub async fn update_dj(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<DjPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".into()));
        }
    }

    let updated = state.catalog.update_dj(&id, patch).await?;
    info!("DJ updated: {}", updated.slug);
    Ok(Json(DjResponse::from(updated)))
}

pub async fn delete_dj(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog.delete_dj(&id).await?;
    info!("DJ deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn approve_dj(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_dj_status(&id, ModerationStatus::Approved)
        .await?;
    info!("DJ approved: {}", updated.slug);
    Ok(Json(DjResponse::from(updated)))
}

pub async fn reject_dj(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_dj_status(&id, ModerationStatus::Rejected)
        .await?;
    info!("DJ rejected: {}", updated.slug);
    Ok(Json(DjResponse::from(updated)))
}
