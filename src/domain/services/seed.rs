use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use chrono::{Duration, NaiveDate, Utc};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use tracing::info;
use uuid::Uuid;

use crate::domain::models::{
    club::Club,
    dj::Dj,
    event::Event,
    moderation::ModerationStatus,
    promoter::Promoter,
    user::{User, ADMIN_USER_ID},
};
use crate::domain::services::catalog::RepoSet;
use crate::domain::services::slug::slugify;
use crate::error::AppError;

fn club(name: &str, address: &str, music_type: &str) -> Club {
    let now = Utc::now();
    Club {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: None,
        status: ModerationStatus::Approved.as_str().to_string(),
        submitted_by: ADMIN_USER_ID.to_string(),
        address: Some(address.to_string()),
        map_link: None,
        music_type: Some(music_type.to_string()),
        photos_json: "[]".to_string(),
        services_json: r#"["vip tables","parking"]"#.to_string(),
        social_links_json: "[]".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn dj(name: &str, genres: &[&str]) -> Dj {
    let now = Utc::now();
    Dj {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: None,
        status: ModerationStatus::Approved.as_str().to_string(),
        submitted_by: ADMIN_USER_ID.to_string(),
        photo_url: None,
        bio: None,
        genres_json: serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string()),
        social_links_json: "[]".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn event(
    name: &str,
    date: NaiveDate,
    time: &str,
    status: ModerationStatus,
    club_id: &str,
    promoter_id: &str,
    dj_ids: &[&str],
) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: None,
        status: status.as_str().to_string(),
        submitted_by: ADMIN_USER_ID.to_string(),
        date,
        time: time.to_string(),
        price: Some("30".to_string()),
        image_url: None,
        video_url: None,
        event_type: Some("club night".to_string()),
        club_id: Some(club_id.to_string()),
        promoter_id: Some(promoter_id.to_string()),
        dj_ids_json: serde_json::to_string(dj_ids).unwrap_or_else(|_| "[]".to_string()),
        social_links_json: "[]".to_string(),
        ticket_link: None,
        created_at: now,
        updated_at: now,
    }
}

/// Populates a fresh local store with the starter catalog and the admin
/// account. A store that already has events is left untouched, so this is
/// safe to run on every boot.
pub async fn seed_if_empty(repos: &RepoSet) -> Result<bool, AppError> {
    if !repos.events.list().await?.is_empty() {
        return Ok(false);
    }

    let admin_password: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(admin_password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let mut admin = User::new(
        "admin".to_string(),
        "admin@sunandflower.example".to_string(),
        password_hash,
    );
    admin.id = ADMIN_USER_ID.to_string();
    admin.role = "admin".to_string();
    repos.users.create(&admin).await?;

    let heliotrope = club("Club Heliotrope", "Carretera Ibiza-San Antonio km 5", "techno");
    let flor_blanca = club("La Flor Blanca", "Passeig Maritim 12, Ibiza", "house");
    repos.clubs.create(&heliotrope).await?;
    repos.clubs.create(&flor_blanca).await?;

    let luna = dj("Luna Pearl", &["melodic techno", "progressive"]);
    let vidal = dj("Marco Vidal", &["tech house"]);
    let sombra = dj("Sombra", &["minimal", "deep house"]);
    repos.djs.create(&luna).await?;
    repos.djs.create(&vidal).await?;
    repos.djs.create(&sombra).await?;

    let now = Utc::now();
    let promoter = Promoter {
        id: Uuid::new_v4().to_string(),
        slug: slugify("Sun & Flower"),
        name: "Sun & Flower".to_string(),
        description: Some("Resident promoter of the white isle.".to_string()),
        status: ModerationStatus::Approved.as_str().to_string(),
        submitted_by: ADMIN_USER_ID.to_string(),
        logo_url: None,
        history: None,
        event_type_focus: Some("open air".to_string()),
        social_links_json: "[]".to_string(),
        created_at: now,
        updated_at: now,
    };
    repos.promoters.create(&promoter).await?;

    let today = Utc::now().date_naive();
    repos.events
        .create(&event(
            "Season Opening",
            today + Duration::days(7),
            "23:00",
            ModerationStatus::Approved,
            &heliotrope.id,
            &promoter.id,
            &[&luna.id, &vidal.id],
        ))
        .await?;
    repos.events
        .create(&event(
            "Full Moon Terrace",
            today + Duration::days(21),
            "22:00",
            ModerationStatus::Approved,
            &flor_blanca.id,
            &promoter.id,
            &[&sombra.id],
        ))
        .await?;
    repos.events
        .create(&event(
            "Sunrise Sessions",
            today + Duration::days(35),
            "06:00",
            ModerationStatus::Pending,
            &flor_blanca.id,
            &promoter.id,
            &[&luna.id],
        ))
        .await?;

    info!(
        "Seeded starter catalog (admin username: admin, password: {})",
        admin_password
    );

    Ok(true)
}
