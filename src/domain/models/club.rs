use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::models::social::SocialLink;
use crate::domain::services::slug::slugify;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Club {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub submitted_by: String,
    pub address: Option<String>,
    pub map_link: Option<String>,
    pub music_type: Option<String>,
    pub photos_json: String,
    pub services_json: String,
    pub social_links_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ClubPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub map_link: Option<String>,
    pub music_type: Option<String>,
    pub photos: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl Club {
    pub fn apply_patch(&mut self, patch: ClubPatch) {
        if let Some(val) = patch.name {
            if val != self.name {
                self.slug = slugify(&val);
            }
            self.name = val;
        }
        if let Some(val) = patch.description { self.description = Some(val); }
        if let Some(val) = patch.address { self.address = Some(val); }
        if let Some(val) = patch.map_link { self.map_link = Some(val); }
        if let Some(val) = patch.music_type { self.music_type = Some(val); }
        if let Some(val) = patch.photos {
            self.photos_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.services {
            self.services_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.social_links {
            self.social_links_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        self.updated_at = Utc::now();
    }
}
