use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fallback owner for content submitted without an account.
pub const ADMIN_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub is_banned: bool,
    pub registration_date: DateTime<Utc>,
    pub preferred_styles_json: String,
    pub user_profile_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<String>,
    pub is_banned: Option<bool>,
    pub preferred_styles: Option<Vec<String>>,
    pub user_profile_type: Option<String>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            role: "user".to_string(),
            is_banned: false,
            registration_date: now,
            preferred_styles_json: "[]".to_string(),
            user_profile_type: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(val) = patch.email { self.email = val; }
        if let Some(val) = patch.password_hash { self.password_hash = val; }
        if let Some(val) = patch.role { self.role = val; }
        if let Some(val) = patch.is_banned { self.is_banned = val; }
        if let Some(val) = patch.preferred_styles {
            self.preferred_styles_json = serde_json::to_string(&val).unwrap_or_else(|_| "[]".to_string());
        }
        if let Some(val) = patch.user_profile_type { self.user_profile_type = Some(val); }
        self.updated_at = Utc::now();
    }
}
