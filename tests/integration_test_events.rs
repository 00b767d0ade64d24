mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_event_assigns_id_slug_and_pending_status() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Closing Party",
                "date": "2025-09-30",
                "dj_ids": []
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["slug"], "closing-party");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["date"], "2025-09-30");
    assert!(!body["submitted_by"].as_str().unwrap().is_empty());

    let id = body["id"].as_str().unwrap();

    let (status, by_id) = app.get(&format!("/api/v1/events/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["id"], id);

    let (status, by_slug) = app.get("/api/v1/events/by-slug/closing-party").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id);
}

#[tokio::test]
async fn test_create_event_rejects_empty_name() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/events", json!({ "name": "   ", "date": "2026-10-01" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_recomputes_slug_and_preserves_other_fields() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Noche Blanca",
                "date": "2026-09-12",
                "time": "23:30",
                "price": "45",
                "event_type": "open air"
            }),
        )
        .await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["slug"], "noche-blanca");

    let (status, updated) = app
        .put(
            &format!("/api/v1/events/{}", id),
            json!({ "name": "Noche Negra" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "noche-negra");
    assert_eq!(updated["name"], "Noche Negra");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["date"], created["date"]);
    assert_eq!(updated["time"], created["time"]);
    assert_eq!(updated["price"], created["price"]);
    assert_eq!(updated["event_type"], created["event_type"]);
    assert_eq!(updated["status"], created["status"]);

    // The old slug no longer resolves
    let (status, _) = app.get("/api/v1/events/by-slug/noche-blanca").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_rename_keeps_slug() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({ "name": "Jardin Secreto", "date": "2026-07-04" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = app
        .put(
            &format!("/api/v1/events/{}", id),
            json!({ "price": "60", "time": "22:00" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["slug"], "jardin-secreto");
    assert_eq!(updated["price"], "60");
    assert_eq!(updated["time"], "22:00");
}

#[tokio::test]
async fn test_delete_event_removes_it_everywhere() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({ "name": "One Night Only", "date": "2026-08-20" }),
        )
        .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/api/v1/events/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deleted");

    let (status, _) = app.get(&format!("/api/v1/events/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get("/api/v1/events/by-slug/one-night-only").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.get("/api/v1/events").await;
    assert!(list
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["id"].as_str().unwrap() != id));
}

#[tokio::test]
async fn test_delete_missing_event_is_404() {
    let app = TestApp::new().await;

    let (status, _) = app.delete("/api/v1/events/no-such-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_lists_round_trip_as_typed_fields() {
    let app = TestApp::new().await;

    let (_, dj) = app
        .post("/api/v1/djs", json!({ "name": "Test Resident" }))
        .await;
    let dj_id = dj["id"].as_str().unwrap();

    let (status, created) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Linked Night",
                "date": "2026-09-01",
                "dj_ids": [dj_id],
                "social_links": [{ "platform": "instagram", "url": "https://instagram.com/linkednight" }]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["dj_ids"], json!([dj_id]));
    assert_eq!(
        created["social_links"][0]["platform"].as_str().unwrap(),
        "instagram"
    );
}
