use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::models::social::SocialLink;
use crate::domain::services::slug::slugify;

/// Storage shape of an event. List-valued fields live in JSON TEXT columns;
/// the API layer converts them to typed lists.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub submitted_by: String,
    pub date: NaiveDate,
    pub time: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub event_type: Option<String>,
    pub club_id: Option<String>,
    pub promoter_id: Option<String>,
    pub dj_ids_json: String,
    pub social_links_json: String,
    pub ticket_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub event_type: Option<String>,
    pub club_id: Option<String>,
    pub promoter_id: Option<String>,
    pub dj_ids: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub ticket_link: Option<String>,
}

impl Event {
    /// Applies a partial update. The slug tracks the name: any name change
    /// recomputes it. `updated_at` is refreshed unconditionally.
    pub fn apply_patch(&mut self, patch: EventPatch) {
        if let Some(val) = patch.name {
            if val != self.name {
                self.slug = slugify(&val);
            }
            self.name = val;
        }
        if let Some(val) = patch.description { self.description = Some(val); }
        if let Some(val) = patch.date { self.date = val; }
        if let Some(val) = patch.time { self.time = val; }
        if let Some(val) = patch.price { self.price = Some(val); }
        if let Some(val) = patch.image_url { self.image_url = Some(val); }
        if let Some(val) = patch.video_url { self.video_url = Some(val); }
        if let Some(val) = patch.event_type { self.event_type = Some(val); }
        if let Some(val) = patch.club_id { self.club_id = Some(val); }
        if let Some(val) = patch.promoter_id { self.promoter_id = Some(val); }
        if let Some(val) = patch.dj_ids {
            self.dj_ids_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.social_links {
            self.social_links_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.ticket_link { self.ticket_link = Some(val); }
        self.updated_at = Utc::now();
    }

    pub fn dj_ids(&self) -> Vec<String> {
        serde_json::from_str(&self.dj_ids_json).unwrap_or_default()
    }
}
