use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::social::SocialLink;

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
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
    pub submitted_by: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateDjRequest {
    pub name: String,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub genres: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub submitted_by: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub map_link: Option<String>,
    pub music_type: Option<String>,
    pub photos: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub submitted_by: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePromoterRequest {
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub history: Option<String>,
    pub event_type_focus: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub submitted_by: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub preferred_styles: Option<Vec<String>>,
    pub user_profile_type: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_banned: Option<bool>,
    pub preferred_styles: Option<Vec<String>>,
    pub user_profile_type: Option<String>,
}
