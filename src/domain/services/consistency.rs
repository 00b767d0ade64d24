use std::collections::HashSet;

use serde::Serialize;

use crate::domain::models::{club::Club, dj::Dj, event::Event, promoter::Promoter};

/// A soft reference on an event whose target no longer exists.
#[derive(Debug, Serialize)]
pub struct DanglingReference {
    pub event_id: String,
    pub event_slug: String,
    pub field: String,
    pub missing_id: String,
}

#[derive(Debug, Serialize)]
pub struct ConsistencyReport {
    pub checked_events: usize,
    pub clean: bool,
    pub dangling: Vec<DanglingReference>,
}

/// Deletes never cascade, so events can be left pointing at DJs, clubs, or
/// promoters that are gone. This scan reports every such reference without
/// repairing anything.
pub fn check(
    events: &[Event],
    djs: &[Dj],
    clubs: &[Club],
    promoters: &[Promoter],
) -> ConsistencyReport {
    let dj_ids: HashSet<&str> = djs.iter().map(|d| d.id.as_str()).collect();
    let club_ids: HashSet<&str> = clubs.iter().map(|c| c.id.as_str()).collect();
    let promoter_ids: HashSet<&str> = promoters.iter().map(|p| p.id.as_str()).collect();

    let mut dangling = Vec::new();

    for event in events {
        if let Some(club_id) = &event.club_id {
            if !club_ids.contains(club_id.as_str()) {
                dangling.push(DanglingReference {
                    event_id: event.id.clone(),
                    event_slug: event.slug.clone(),
                    field: "club_id".to_string(),
                    missing_id: club_id.clone(),
                });
            }
        }

        if let Some(promoter_id) = &event.promoter_id {
            if !promoter_ids.contains(promoter_id.as_str()) {
                dangling.push(DanglingReference {
                    event_id: event.id.clone(),
                    event_slug: event.slug.clone(),
                    field: "promoter_id".to_string(),
                    missing_id: promoter_id.clone(),
                });
            }
        }

        for dj_id in event.dj_ids() {
            if !dj_ids.contains(dj_id.as_str()) {
                dangling.push(DanglingReference {
                    event_id: event.id.clone(),
                    event_slug: event.slug.clone(),
                    field: "dj_ids".to_string(),
                    missing_id: dj_id,
                });
            }
        }
    }

    ConsistencyReport {
        checked_events: events.len(),
        clean: dangling.is_empty(),
        dangling,
    }
}
