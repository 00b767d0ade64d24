mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_approve_pending_club_changes_only_status() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/clubs",
            json!({
                "name": "El Faro",
                "address": "Cap des Falco 1",
                "music_type": "balearic",
                "services": ["terrace", "restaurant"]
            }),
        )
        .await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["status"], "pending");

    let (status, approved) = app
        .post(&format!("/api/v1/clubs/{}/approve", id), json!({}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    // Every field except status is untouched, updated_at included
    let mut expected = created.clone();
    expected["status"] = json!("approved");
    assert_eq!(approved, expected);
}

#[tokio::test]
async fn test_reject_pending_dj() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/v1/djs", json!({ "name": "Unlucky Selector" }))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, rejected) = app
        .post(&format!("/api/v1/djs/{}/reject", id), json!({}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");
}

#[tokio::test]
async fn test_moderating_missing_entity_is_404() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/promoters/no-such-id/approve", json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pending_queue_groups_by_entity_type() {
    let app = TestApp::new().await;

    let (_, event) = app
        .post(
            "/api/v1/events",
            json!({ "name": "Queue Event", "date": "2026-11-11" }),
        )
        .await;
    let (_, dj) = app.post("/api/v1/djs", json!({ "name": "Queue DJ" })).await;
    let (_, club) = app.post("/api/v1/clubs", json!({ "name": "Queue Club" })).await;
    let (_, promoter) = app
        .post("/api/v1/promoters", json!({ "name": "Queue Promoter" }))
        .await;

    let (status, queue) = app.get("/api/v1/moderation/pending").await;
    assert_eq!(status, StatusCode::OK);

    let contains = |list: &serde_json::Value, id: &serde_json::Value| {
        list.as_array().unwrap().iter().any(|item| &item["id"] == id)
    };

    assert!(contains(&queue["events"], &event["id"]));
    assert!(contains(&queue["djs"], &dj["id"]));
    assert!(contains(&queue["clubs"], &club["id"]));
    assert!(contains(&queue["promoters"], &promoter["id"]));

    // Approval removes the item from the queue
    app.post(
        &format!("/api/v1/djs/{}/approve", dj["id"].as_str().unwrap()),
        json!({}),
    )
    .await;

    let (_, queue) = app.get("/api/v1/moderation/pending").await;
    assert!(!contains(&queue["djs"], &dj["id"]));
}

#[tokio::test]
async fn test_rejected_item_can_be_reopened_by_approval() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post("/api/v1/promoters", json!({ "name": "Second Chance" }))
        .await;
    let id = created["id"].as_str().unwrap();

    app.post(&format!("/api/v1/promoters/{}/reject", id), json!({}))
        .await;
    let (status, approved) = app
        .post(&format!("/api/v1/promoters/{}/approve", id), json!({}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
}
