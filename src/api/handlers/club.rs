use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::{requests::CreateClubRequest, responses::ClubResponse};
use crate::domain::models::club::{Club, ClubPatch};
use crate::domain::models::moderation::ModerationStatus;
use crate::domain::models::user::ADMIN_USER_ID;
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_club(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateClubRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let now = Utc::now();
    let club = Club {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: payload.description,
        status: ModerationStatus::Pending.as_str().to_string(),
        submitted_by: payload
            .submitted_by
            .unwrap_or_else(|| ADMIN_USER_ID.to_string()),
        address: payload.address,
        map_link: payload.map_link,
        music_type: payload.music_type,
        photos_json: serde_json::to_string(&payload.photos.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid photos".into()))?,
        services_json: serde_json::to_string(&payload.services.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid services".into()))?,
        social_links_json: serde_json::to_string(&payload.social_links.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid social_links".into()))?,
        created_at: now,
        updated_at: now,
    };

    let created = state.catalog.add_club(club).await?;
    info!("Created club: {} ({})", created.slug, created.id);
    Ok(Json(ClubResponse::from(created)))
}

pub async fn list_clubs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let clubs: Vec<ClubResponse> = state
        .catalog
        .clubs()
        .into_iter()
        .map(ClubResponse::from)
        .collect();
    Json(clubs)
}

pub async fn get_club(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let club = state
        .catalog
        .find_club_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Club not found".into()))?;
    Ok(Json(ClubResponse::from(club)))
}

pub async fn get_club_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let club = state
        .catalog
        .find_club_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Club '{}' not found", slug)))?;
    Ok(Json(ClubResponse::from(club)))
}

pub async fn update_club(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ClubPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".into()));
        }
    }

    let updated = state.catalog.update_club(&id, patch).await?;
    info!("Club updated: {}", updated.slug);
    Ok(Json(ClubResponse::from(updated)))
}

pub async fn delete_club(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog.delete_club(&id).await?;
    info!("Club deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn approve_club(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_club_status(&id, ModerationStatus::Approved)
        .await?;
    info!("Club approved: {}", updated.slug);
    Ok(Json(ClubResponse::from(updated)))
}

pub async fn reject_club(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_club_status(&id, ModerationStatus::Rejected)
        .await?;
    info!("Club rejected: {}", updated.slug);
    Ok(Json(ClubResponse::from(updated)))
}
