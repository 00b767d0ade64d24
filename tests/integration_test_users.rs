mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_create_user_defaults_and_hidden_password() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post(
            "/api/v1/users",
            json!({
                "username": "carla",
                "email": "carla@example.com",
                "password": "correct-horse-battery",
                "preferred_styles": ["techno", "house"]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["username"], "carla");
    assert_eq!(created["role"], "user");
    assert_eq!(created["is_banned"], false);
    assert_eq!(created["preferred_styles"], json!(["techno", "house"]));
    assert!(created.get("password_hash").is_none());
    assert!(created.get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let app = TestApp::new().await;

    app.post(
        "/api/v1/users",
        json!({ "username": "dario", "email": "d1@example.com", "password": "pw-one-two-three" }),
    )
    .await;

    let (status, _) = app
        .post(
            "/api/v1/users",
            json!({ "username": "dario", "email": "d2@example.com", "password": "pw-four-five-six" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_role_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/users",
            json!({
                "username": "eve",
                "email": "eve@example.com",
                "password": "pw-seven-eight",
                "role": "superuser"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ban_and_unban_via_update() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/users",
            json!({ "username": "fiona", "email": "f@example.com", "password": "pw-nine-ten" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, banned) = app
        .put(&format!("/api/v1/users/{}", id), json!({ "is_banned": true }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banned["is_banned"], true);

    let (_, unbanned) = app
        .put(&format!("/api/v1/users/{}", id), json!({ "is_banned": false }))
        .await;
    assert_eq!(unbanned["is_banned"], false);
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new().await;

    let (_, created) = app
        .post(
            "/api/v1/users",
            json!({ "username": "gone", "email": "g@example.com", "password": "pw-eleven-12" }),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = app.delete(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
