use axum::{extract::State, http::header, response::IntoResponse, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dtos::responses::EventResponse;
use crate::domain::models::moderation::ModerationStatus;
use crate::domain::services::feed;
use crate::state::AppState;

pub async fn get_calendar(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events: Vec<EventResponse> = state
        .catalog
        .calendar_events()
        .into_iter()
        .map(EventResponse::from)
        .collect();
    Json(events)
}

pub async fn get_upcoming(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events: Vec<EventResponse> = state
        .catalog
        .upcoming_events()
        .into_iter()
        .map(EventResponse::from)
        .collect();
    Json(events)
}

pub async fn get_featured(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let events: Vec<EventResponse> = state
        .catalog
        .featured_events()
        .into_iter()
        .map(EventResponse::from)
        .collect();
    Json(events)
}

/// Approved future events as an iCalendar feed, for subscription from
/// external calendar apps.
pub async fn get_feed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let events: Vec<_> = state
        .catalog
        .calendar_events()
        .into_iter()
        .filter(|e| e.status == ModerationStatus::Approved.as_str() && e.date >= today)
        .collect();

    let body = feed::generate_feed(&events);

    ([(header::CONTENT_TYPE, "text/calendar; charset=utf-8")], body)
}
