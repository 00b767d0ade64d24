mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_fresh_store_is_seeded_with_starter_catalog() {
    let app = TestApp::new().await;

    let (_, events) = app.get("/api/v1/events").await;
    assert!(!events.as_array().unwrap().is_empty());

    let slugs: Vec<&str> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["slug"].as_str().unwrap())
        .collect();
    assert!(slugs.contains(&"season-opening"));

    let (_, clubs) = app.get("/api/v1/clubs").await;
    assert!(!clubs.as_array().unwrap().is_empty());

    let (_, djs) = app.get("/api/v1/djs").await;
    assert!(!djs.as_array().unwrap().is_empty());

    // The admin account exists but its password hash is never serialized
    let (_, users) = app.get("/api/v1/users").await;
    let admin = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "admin")
        .expect("admin account missing");
    assert_eq!(admin["role"], "admin");
    assert!(admin.get("password_hash").is_none());
}

#[tokio::test]
async fn test_status_is_local_only_without_remote() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/api/v1/sync/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection"], "local-only");
    assert_eq!(body["loading"], false);
    assert!(body["error"].is_null());
    assert!(!body["last_refresh"].is_null());
}

#[tokio::test]
async fn test_unreachable_remote_falls_back_to_local() {
    let app = TestApp::with_unreachable_remote().await;

    let (_, body) = app.get("/api/v1/sync/status").await;
    assert_eq!(body["connection"], "local-only");

    // Collections reflect the local store, not an empty set
    let (_, events) = app.get("/api/v1/events").await;
    assert!(!events.as_array().unwrap().is_empty());

    // An explicit remote-preferred refresh still lands on local
    let (status, body) = app.post("/api/v1/sync/refresh", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection"], "local-only");
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let app = TestApp::new().await;

    app.post(
        "/api/v1/events",
        json!({ "name": "Stable Night", "date": "2026-10-10" }),
    )
    .await;

    let (status, _) = app.post("/api/v1/sync/refresh", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, first) = app.get("/api/v1/events").await;

    let (status, _) = app.post("/api/v1/sync/refresh", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = app.get("/api/v1/events").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_mutations_survive_a_refresh() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({ "name": "Persisted Party", "date": "2026-09-09" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    app.post(&format!("/api/v1/events/{}/approve", id), json!({}))
        .await;
    app.post("/api/v1/sync/refresh", json!({})).await;

    let (status, reloaded) = app.get(&format!("/api/v1/events/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reloaded["status"], "approved");
}
