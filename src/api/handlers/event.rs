use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::{requests::CreateEventRequest, responses::EventResponse};
use crate::domain::models::event::{Event, EventPatch};
use crate::domain::models::moderation::ModerationStatus;
use crate::domain::models::user::ADMIN_USER_ID;
use crate::domain::services::slug::slugify;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".into()));
    }

    let now = Utc::now();
    let event = Event {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: payload.description,
        status: ModerationStatus::Pending.as_str().to_string(),
        submitted_by: payload
            .submitted_by
            .unwrap_or_else(|| ADMIN_USER_ID.to_string()),
        date: payload.date,
        time: payload.time.unwrap_or_else(|| "00:00".to_string()),
        price: payload.price,
        image_url: payload.image_url,
        video_url: payload.video_url,
        event_type: payload.event_type,
        club_id: payload.club_id,
        promoter_id: payload.promoter_id,
        dj_ids_json: serde_json::to_string(&payload.dj_ids.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid dj_ids".into()))?,
        social_links_json: serde_json::to_string(&payload.social_links.unwrap_or_default())
            .map_err(|_| AppError::Validation("Invalid social_links".into()))?,
        ticket_link: payload.ticket_link,
        created_at: now,
        updated_at: now,
    };

    let created = state.catalog.add_event(event).await?;
    info!("Created event: {} ({})", created.slug, created.id);
    Ok(Json(EventResponse::from(created)))
}

pub async fn list_events(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events: Vec<EventResponse> = state
        .catalog
        .events()
        .into_iter()
        .map(EventResponse::from)
        .collect();
    Json(events)
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .catalog
        .find_event_by_id(&id)
        .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
    Ok(Json(EventResponse::from(event)))
}

pub async fn get_event_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .catalog
        .find_event_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", slug)))?;
    Ok(Json(EventResponse::from(event)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".into()));
        }
    }

    let updated = state.catalog.update_event(&id, patch).await?;
    info!("Event updated: {}", updated.slug);
    Ok(Json(EventResponse::from(updated)))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog.delete_event(&id).await?;
    info!("Event deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn approve_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_event_status(&id, ModerationStatus::Approved)
        .await?;
    info!("Event approved: {}", updated.slug);
    Ok(Json(EventResponse::from(updated)))
}

pub async fn reject_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state
        .catalog
        .set_event_status(&id, ModerationStatus::Rejected)
        .await?;
    info!("Event rejected: {}", updated.slug);
    Ok(Json(EventResponse::from(updated)))
}
