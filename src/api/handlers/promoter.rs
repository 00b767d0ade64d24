use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::{requests::CreatePromoterRequest, responses::PromoterResponse};
use crate::domain::models::moderation::ModerationStatus;
use crate::domain::models::promoter::{Promoter, PromoterPatch};
use crate::domain::models::user::ADMIN_USER_ID;
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_promoter(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePromoterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let now = Utc::now();
    let promoter = Promoter {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: payload.description,
        status: ModerationStatus::Pending.as_str().to_string(),
        submitted_by: payload
            .submitted_by
            .unwrap_or_else(|| ADMIN_USER_ID.to_string()),
        logo_url: payload.logo_url,
        history: payload.history,
        event_type_focus: payload.event_type_focus,
        social_links_json: serde_json::to_string(&payload.social_links.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid social_links".into()))?,
        created_at: now,
        updated_at: now,
    };

    let created = state.catalog.add_promoter(promoter).await?;
    info!("Created promoter: {} ({})", created.slug, created.id);
    Ok(Json(PromoterResponse::from(created)))
}

pub async fn list_promoters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let promoters: Vec<PromoterResponse> = state
        .catalog
        .promoters()
        .into_iter()
        .map(PromoterResponse::from)
        .collect();
    Json(promoters)
}

pub async fn get_promoter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let promoter = state
        .catalog
        .find_promoter_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Promoter not found".into()))?;
    Ok(Json(PromoterResponse::from(promoter)))
}

pub async fn get_promoter_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let promoter = state
        .catalog
        .find_promoter_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Promoter '{}' not found", slug)))?;
    Ok(Json(PromoterResponse::from(promoter)))
}

pub async fn update_promoter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<PromoterPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".into()));
        }
    }

    let updated = state.catalog.update_promoter(&id, patch).await?;
    info!("Promoter updated: {}", updated.slug);
    Ok(Json(PromoterResponse::from(updated)))
}

pub async fn delete_promoter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog.delete_promoter(&id).await?;
    info!("Promoter deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn approve_promoter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_promoter_status(&id, ModerationStatus::Approved)
        .await?;
    info!("Promoter approved: {}", updated.slug);
    Ok(Json(PromoterResponse::from(updated)))
}

pub async fn reject_promoter(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_promoter_status(&id, ModerationStatus::Rejected)
        .await?;
    info!("Promoter rejected: {}", updated.slug);
    Ok(Json(PromoterResponse::from(updated)))
}
