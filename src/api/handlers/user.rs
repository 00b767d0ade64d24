use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use rand::rngs::OsRng;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::{
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::UserResponse,
};
use crate::domain::models::user::{User, UserPatch};
use crate::error::AppError;
use crate::state::AppState;

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError::Validation("Username must not be empty".into()));
    }

    if let Some(role) = &payload.role {
        match role.as_str() {
            "user" | "admin" => {}
            _ => return Err(AppError::Validation("Invalid role".into())),
        }
    }

    if state.catalog.find_user_by_username(username).is_some() {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;

    let mut user = User::new(username.to_string(), payload.email, password_hash);
    if let Some(role) = payload.role {
        user.role = role;
    }
    if let Some(styles) = payload.preferred_styles {
        user.preferred_styles_json =
            serde_json::to_string(&styles).map_err(|_| AppError::Validation("Invalid preferred_styles".into()))?;
    }
    user.user_profile_type = payload.user_profile_type;

    let created = state.catalog.add_user(user).await?;
    info!("Created user: {} ({})", created.username, created.id);
    Ok(Json(UserResponse::from(created)))
}

pub async fn list_users(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let users: Vec<UserResponse> = state
        .catalog
        .users()
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Json(users)
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .catalog
        .find_user_by_id(&id)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(UserResponse::from(user)))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(role) = &payload.role {
        match role.as_str() {
            "user" | "admin" => {}
            _ => return Err(AppError::Validation("Invalid role".into())),
        }
    }

    let password_hash = match payload.password {
        Some(password) => Some(hash_password(&password)?),
        None => None,
    };

    let patch = UserPatch {
        email: payload.email,
        password_hash,
        role: payload.role,
        is_banned: payload.is_banned,
        preferred_styles: payload.preferred_styles,
        user_profile_type: payload.user_profile_type,
    };

    let updated = state.catalog.update_user(&id, patch).await?;
    info!("User updated: {}", updated.username);
    Ok(Json(UserResponse::from(updated)))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog.delete_user(&id).await?;
    info!("User deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
