use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::models::social::SocialLink;
use crate::domain::services::slug::slugify;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Promoter {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub submitted_by: String,
    pub logo_url: Option<String>,
    pub history: Option<String>,
    pub event_type_focus: Option<String>,
    pub social_links_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PromoterPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub history: Option<String>,
    pub event_type_focus: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl Promoter {
    pub fn apply_patch(&mut self, patch: PromoterPatch) {
        if let Some(val) = patch.name {
            if val != self.name {
                self.slug = slugify(&val);
            }
            self.name = val;
        }
        if let Some(val) = patch.description { self.description = Some(val); }
        if let Some(val) = patch.logo_url { self.logo_url = Some(val); }
        if let Some(val) = patch.history { self.history = Some(val); }
        if let Some(val) = patch.event_type_focus { self.event_type_focus = Some(val); }
        if let Some(val) = patch.social_links {
            self.social_links_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        self.updated_at = Utc::now();
    }
}
