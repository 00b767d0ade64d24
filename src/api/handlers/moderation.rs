use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::dtos::responses::{ClubResponse, DjResponse, EventResponse, PromoterResponse};
use crate::state::AppState;

#[derive(Serialize)]
pub struct PendingQueue {
    pub events: Vec<EventResponse>,
    pub djs: Vec<DjResponse>,
    pub clubs: Vec<ClubResponse>,
    pub promoters: Vec<PromoterResponse>,
}

/// Everything awaiting review, grouped for the admin dashboard.
pub async fn get_pending(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let queue = PendingQueue {
        events: state
            .catalog
            .pending_events()
            .into_iter()
            .map(EventResponse::from)
            .collect(),
        djs: state
            .catalog
            .pending_djs()
            .into_iter()
            .map(DjResponse::from)
            .collect(),
        clubs: state
            .catalog
            .pending_clubs()
            .into_iter()
            .map(ClubResponse::from)
            .collect(),
        promoters: state
            .catalog
            .pending_promoters()
            .into_iter()
            .map(PromoterResponse::from)
            .collect(),
    };

    Json(queue)
}

pub async fn get_consistency(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.check_consistency())
}
