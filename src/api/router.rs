use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{
    calendar, club, dj, event, health, moderation, promoter, sync, user,
};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public calendar views
        .route("/api/v1/calendar", get(calendar::get_calendar))
        .route("/api/v1/calendar/upcoming", get(calendar::get_upcoming))
        .route("/api/v1/calendar/featured", get(calendar::get_featured))
        .route("/api/v1/calendar/feed.ics", get(calendar::get_feed))

        // Events
        .route("/api/v1/events", get(event::list_events).post(event::create_event))
        .route("/api/v1/events/by-slug/{slug}", get(event::get_event_by_slug))
        .route("/api/v1/events/{id}", get(event::get_event).put(event::update_event).delete(event::delete_event))
        .route("/api/v1/events/{id}/approve", post(event::approve_event))
        .route("/api/v1/events/{id}/reject", post(event::reject_event))

        // DJs
        .route("/api/v1/djs", get(dj::list_djs).post(dj::create_dj))
        .route("/api/v1/djs/by-slug/{slug}", get(dj::get_dj_by_slug))
        .route("/api/v1/djs/{id}", get(dj::get_dj).put(dj::update_dj).delete(dj::delete_dj))
        .route("/api/v1/djs/{id}/approve", post(dj::approve_dj))
        .route("/api/v1/djs/{id}/reject", post(dj::reject_dj))

        // Clubs
        .route("/api/v1/clubs", get(club::list_clubs).post(club::create_club))
        .route("/api/v1/clubs/by-slug/{slug}", get(club::get_club_by_slug))
        .route("/api/v1/clubs/{id}", get(club::get_club).put(club::update_club).delete(club::delete_club))
        .route("/api/v1/clubs/{id}/approve", post(club::approve_club))
        .route("/api/v1/clubs/{id}/reject", post(club::reject_club))

        // Promoters
        .route("/api/v1/promoters", get(promoter::list_promoters).post(promoter::create_promoter))
        .route("/api/v1/promoters/by-slug/{slug}", get(promoter::get_promoter_by_slug))
        .route("/api/v1/promoters/{id}", get(promoter::get_promoter).put(promoter::update_promoter).delete(promoter::delete_promoter))
        .route("/api/v1/promoters/{id}/approve", post(promoter::approve_promoter))
        .route("/api/v1/promoters/{id}/reject", post(promoter::reject_promoter))

        // Accounts
        .route("/api/v1/users", get(user::list_users).post(user::create_user))
        .route("/api/v1/users/{id}", get(user::get_user).put(user::update_user).delete(user::delete_user))

        // Moderation & sync
        .route("/api/v1/moderation/pending", get(moderation::get_pending))
        .route("/api/v1/consistency", get(moderation::get_consistency))
        .route("/api/v1/sync/status", get(sync::get_status))
        .route("/api/v1/sync/refresh", post(sync::refresh))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
