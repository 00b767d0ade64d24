use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::models::social::SocialLink;
use crate::domain::services::slug::slugify;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Dj {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub submitted_by: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub genres_json: String,
    pub social_links_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DjPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub genres: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl Dj {
    pub fn apply_patch(&mut self, patch: DjPatch) {
        if let Some(val) = patch.name {
            if val != self.name {
                self.slug = slugify(&val);
            }
            self.name = val;
        }
        if let Some(val) = patch.description { self.description = Some(val); }
        if let Some(val) = patch.photo_url { self.photo_url = Some(val); }
        if let Some(val) = patch.bio { self.bio = Some(val); }
        if let Some(val) = patch.genres {
            self.genres_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.social_links {
            self.social_links_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        self.updated_at = Utc::now();
    }
}
