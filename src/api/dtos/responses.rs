use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::models::{
    club::Club,
    dj::Dj,
    event::Event,
    moderation::ModerationStatus,
    promoter::Promoter,
    social::SocialLink,
    user::{User, ADMIN_USER_ID},
};

/// JSON list columns tolerate malformed data by degrading to an empty list,
/// mirroring how the stores treat unreadable collections as empty.
fn parse_list<T: DeserializeOwned>(json: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_default()
}

fn parse_status(status: &str) -> ModerationStatus {
    ModerationStatus::parse(status).unwrap_or(ModerationStatus::Pending)
}

fn owner_or_admin(submitted_by: &str) -> String {
    if submitted_by.is_empty() {
        ADMIN_USER_ID.to_string()
    } else {
        submitted_by.to_string()
    }
}

#[derive(Serialize)]
pub struct EventResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ModerationStatus,
    pub submitted_by: String,
    pub date: NaiveDate,
    pub time: String,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub event_type: Option<String>,
    pub club_id: Option<String>,
    pub promoter_id: Option<String>,
    pub dj_ids: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub ticket_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            dj_ids: parse_list(&event.dj_ids_json),
            social_links: parse_list(&event.social_links_json),
            status: parse_status(&event.status),
            submitted_by: owner_or_admin(&event.submitted_by),
            id: event.id,
            slug: event.slug,
            name: event.name,
            description: event.description,
            date: event.date,
            time: event.time,
            price: event.price,
            image_url: event.image_url,
            video_url: event.video_url,
            event_type: event.event_type,
            club_id: event.club_id,
            promoter_id: event.promoter_id,
            ticket_link: event.ticket_link,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct DjResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ModerationStatus,
    pub submitted_by: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub genres: Vec<String>,
    pub genre: String,
    pub social_links: Vec<SocialLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Dj> for DjResponse {
    fn from(dj: Dj) -> Self {
        let genres: Vec<String> = parse_list(&dj.genres_json);
        Self {
            genre: genres.join(", "),
            genres,
            social_links: parse_list(&dj.social_links_json),
            status: parse_status(&dj.status),
            submitted_by: owner_or_admin(&dj.submitted_by),
            id: dj.id,
            slug: dj.slug,
            name: dj.name,
            description: dj.description,
            // The public shape calls every picture an image_url.
            image_url: dj.photo_url,
            bio: dj.bio,
            created_at: dj.created_at,
            updated_at: dj.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ModerationStatus,
    pub submitted_by: String,
    pub address: Option<String>,
    pub map_link: Option<String>,
    pub music_type: Option<String>,
    pub photos: Vec<String>,
    pub services: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self {
            photos: parse_list(&club.photos_json),
            services: parse_list(&club.services_json),
            social_links: parse_list(&club.social_links_json),
            status: parse_status(&club.status),
            submitted_by: owner_or_admin(&club.submitted_by),
            id: club.id,
            slug: club.slug,
            name: club.name,
            description: club.description,
            address: club.address,
            map_link: club.map_link,
            music_type: club.music_type,
            created_at: club.created_at,
            updated_at: club.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct PromoterResponse {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ModerationStatus,
    pub submitted_by: String,
    pub logo_url: Option<String>,
    pub history: Option<String>,
    pub event_type_focus: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Promoter> for PromoterResponse {
    fn from(promoter: Promoter) -> Self {
        Self {
            social_links: parse_list(&promoter.social_links_json),
            status: parse_status(&promoter.status),
            submitted_by: owner_or_admin(&promoter.submitted_by),
            id: promoter.id,
            slug: promoter.slug,
            name: promoter.name,
            description: promoter.description,
            logo_url: promoter.logo_url,
            history: promoter.history,
            event_type_focus: promoter.event_type_focus,
            created_at: promoter.created_at,
            updated_at: promoter.updated_at,
        }
    }
}

/// Account shape handed to the UI; the password hash never leaves the server.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_banned: bool,
    pub registration_date: DateTime<Utc>,
    pub preferred_styles: Vec<String>,
    pub user_profile_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            preferred_styles: parse_list(&user.preferred_styles_json),
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            is_banned: user.is_banned,
            registration_date: user.registration_date,
            user_profile_type: user.user_profile_type,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
