mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_deleting_a_dj_leaves_a_reported_dangling_reference() {
    let app = TestApp::new().await;

    let (_, dj) = app
        .post("/api/v1/djs", json!({ "name": "Vanishing Act" }))
        .await;
    let dj_id = dj["id"].as_str().unwrap().to_string();

    let (_, event) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Orphaned Lineup",
                "date": "2026-11-20",
                "dj_ids": [dj_id]
            }),
        )
        .await;
    let event_id = event["id"].as_str().unwrap().to_string();

    let (_, report) = app.get("/api/v1/consistency").await;
    assert_eq!(report["clean"], true);

    // Deleting the DJ does not cascade into the event
    app.delete(&format!("/api/v1/djs/{}", dj_id)).await;

    let (status, reloaded) = app.get(&format!("/api/v1/events/{}", event_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reloaded["dj_ids"], json!([dj_id]));

    let (status, report) = app.get("/api/v1/consistency").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["clean"], false);

    let dangling = report["dangling"].as_array().unwrap();
    assert!(dangling.iter().any(|d| {
        d["event_id"] == event_id.as_str()
            && d["field"] == "dj_ids"
            && d["missing_id"] == dj_id.as_str()
    }));
}

#[tokio::test]
async fn test_unknown_club_and_promoter_references_are_reported() {
    let app = TestApp::new().await;

    let (_, event) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Phantom Venue",
                "date": "2026-11-21",
                "club_id": "ghost-club",
                "promoter_id": "ghost-promoter"
            }),
        )
        .await;
    let event_id = event["id"].as_str().unwrap();

    let (_, report) = app.get("/api/v1/consistency").await;
    let dangling = report["dangling"].as_array().unwrap();

    assert!(dangling
        .iter()
        .any(|d| d["event_id"] == event_id && d["field"] == "club_id" && d["missing_id"] == "ghost-club"));
    assert!(dangling
        .iter()
        .any(|d| d["event_id"] == event_id
            && d["field"] == "promoter_id"
            && d["missing_id"] == "ghost-promoter"));
}
