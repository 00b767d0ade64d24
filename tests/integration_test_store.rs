mod common;

use chrono::{NaiveDate, Utc};
use common::TestApp;
use uuid::Uuid;

use sunflower_backend::domain::models::event::Event;
use sunflower_backend::domain::services::slug::slugify;
use sunflower_backend::error::AppError;
use sunflower_backend::infra::factory::sqlite_repos;

fn sample_event(name: &str, date: NaiveDate) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4().to_string(),
        slug: slugify(name),
        name: name.to_string(),
        description: None,
        status: "pending".to_string(),
        submitted_by: "tester".to_string(),
        date,
        time: "23:00".to_string(),
        price: None,
        image_url: None,
        video_url: None,
        event_type: None,
        club_id: None,
        promoter_id: None,
        dj_ids_json: "[]".to_string(),
        social_links_json: "[]".to_string(),
        ticket_link: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_event_repo_round_trip() {
    let app = TestApp::new().await;
    let repos = sqlite_repos(&app.pool);

    let date = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
    let event = sample_event("Store Level Party", date);

    let created = repos.events.create(&event).await.unwrap();
    assert_eq!(created.id, event.id);
    assert_eq!(created.slug, "store-level-party");
    assert_eq!(created.date, date);

    let by_id = repos.events.find_by_id(&event.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "Store Level Party");

    let by_slug = repos
        .events
        .find_by_slug("store-level-party")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_slug.id, event.id);

    assert!(repos.events.find_by_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_event_repo_update_replaces_row() {
    let app = TestApp::new().await;
    let repos = sqlite_repos(&app.pool);

    let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
    let mut event = sample_event("Before Rename", date);
    repos.events.create(&event).await.unwrap();

    event.name = "After Rename".to_string();
    event.slug = slugify(&event.name);
    event.status = "approved".to_string();
    event.updated_at = Utc::now();

    let updated = repos.events.update(&event).await.unwrap();
    assert_eq!(updated.slug, "after-rename");
    assert_eq!(updated.status, "approved");

    assert!(repos
        .events
        .find_by_slug("before-rename")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_event_repo_delete_semantics() {
    let app = TestApp::new().await;
    let repos = sqlite_repos(&app.pool);

    let date = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
    let event = sample_event("Short Lived", date);
    repos.events.create(&event).await.unwrap();

    repos.events.delete(&event.id).await.unwrap();
    assert!(repos.events.find_by_id(&event.id).await.unwrap().is_none());

    let err = repos.events.delete(&event.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_list_is_ordered_by_creation() {
    let app = TestApp::new().await;
    let repos = sqlite_repos(&app.pool);

    let before = repos.events.list().await.unwrap().len();

    let date = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
    let first = sample_event("Listed First", date);
    let second = sample_event("Listed Second", date);
    repos.events.create(&first).await.unwrap();
    repos.events.create(&second).await.unwrap();

    let all = repos.events.list().await.unwrap();
    assert_eq!(all.len(), before + 2);

    let pos_first = all.iter().position(|e| e.id == first.id).unwrap();
    let pos_second = all.iter().position(|e| e.id == second.id).unwrap();
    assert!(pos_first < pos_second);
}
