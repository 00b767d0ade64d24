mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_calendar_never_contains_rejected_events() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({ "name": "Doomed Party", "date": "2026-12-01" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = app
        .post(&format!("/api/v1/events/{}/reject", id), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, calendar) = app.get("/api/v1/calendar").await;
    assert!(calendar
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["id"].as_str().unwrap() != id));

    // Pending events remain visible on the calendar
    let (_, pending) = app
        .post(
            "/api/v1/events",
            json!({ "name": "Awaiting Review", "date": "2026-12-02" }),
        )
        .await;
    let (_, calendar) = app.get("/api/v1/calendar").await;
    assert!(calendar
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["id"] == pending["id"]));
}

#[tokio::test]
async fn test_calendar_is_sorted_by_date() {
    let app = TestApp::new().await;

    app.post("/api/v1/events", json!({ "name": "Late Show", "date": "2027-03-03" }))
        .await;
    app.post("/api/v1/events", json!({ "name": "Early Show", "date": "2026-01-01" }))
        .await;
    app.post("/api/v1/events", json!({ "name": "Mid Show", "date": "2026-06-15" }))
        .await;

    let (_, calendar) = app.get("/api/v1/calendar").await;
    let dates: Vec<&str> = calendar
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();

    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_upcoming_excludes_past_and_caps_at_ten() {
    let app = TestApp::new().await;

    let today = Utc::now().date_naive();

    let (_, past) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Already Happened",
                "date": (today - Duration::days(30)).to_string()
            }),
        )
        .await;

    for i in 0..12 {
        app.post(
            "/api/v1/events",
            json!({
                "name": format!("Future Night {}", i),
                "date": (today + Duration::days(i + 1)).to_string()
            }),
        )
        .await;
    }

    let (_, upcoming) = app.get("/api/v1/calendar/upcoming").await;
    let events = upcoming.as_array().unwrap();

    assert!(events.len() <= 10);
    assert!(events
        .iter()
        .all(|e| e["id"].as_str().unwrap() != past["id"].as_str().unwrap()));
    assert!(events
        .iter()
        .all(|e| e["date"].as_str().unwrap() >= today.to_string().as_str()));
}

#[tokio::test]
async fn test_featured_is_approved_only_and_caps_at_six() {
    let app = TestApp::new().await;

    for i in 0..8 {
        let (_, created) = app
            .post(
                "/api/v1/events",
                json!({
                    "name": format!("Headliner {}", i),
                    "date": format!("2026-10-{:02}", i + 1)
                }),
            )
            .await;
        app.post(
            &format!("/api/v1/events/{}/approve", created["id"].as_str().unwrap()),
            json!({}),
        )
        .await;
    }

    let (_, featured) = app.get("/api/v1/calendar/featured").await;
    let events = featured.as_array().unwrap();

    assert!(events.len() <= 6);
    assert!(events.iter().all(|e| e["status"] == "approved"));
}

#[tokio::test]
async fn test_ics_feed_contains_approved_upcoming_events() {
    let app = TestApp::new().await;

    let today = Utc::now().date_naive();
    let (_, created) = app
        .post(
            "/api/v1/events",
            json!({
                "name": "Feed Fiesta",
                "date": (today + Duration::days(3)).to_string()
            }),
        )
        .await;
    let id = created["id"].as_str().unwrap();
    app.post(&format!("/api/v1/events/{}/approve", id), json!({}))
        .await;

    let (status, content_type, body) = app.get_raw("/api/v1/calendar/feed.ics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/calendar"));
    assert!(body.contains("BEGIN:VCALENDAR"));
    assert!(body.contains("Feed Fiesta"));
    assert!(body.contains(id));
}
