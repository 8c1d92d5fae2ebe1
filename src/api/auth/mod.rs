//! Authentication API endpoints
//!
//! Login issues an access token; register adds a self-service user.

use axum::{extract::State, http::StatusCode, routing::post, Router};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::{User, UserRole};
use crate::domain::TokenDetails;
use crate::infrastructure::user::RegisterUserRequest;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: Option<String>,
    pub token: String,
    pub issued_at: String,
    pub expires_at: String,
}

impl From<&TokenDetails> for LoginResponse {
    fn from(details: &TokenDetails) -> Self {
        Self {
            user_id: details.user_id().map(|id| id.to_string()),
            token: details.token().to_string(),
            issued_at: details
                .issued_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            expires_at: details
                .expires_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// User response (safe to expose)
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: String,
    pub enabled: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            role: user.role().as_str().to_string(),
            enabled: user.is_enabled(),
        }
    }
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let details = state
        .security_service
        .authenticate(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse::from(&details)))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_service
        .register(RegisterUserRequest::new(
            request.username,
            request.password,
            UserRole::User,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}
