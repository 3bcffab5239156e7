//! Axum route handlers for registration, login, and the profile view.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{self, CurrentUser};
use crate::billing::plans::Plan;
use crate::errors::AppError;
use crate::profiles;
use crate::quota;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub email: String,
    pub subscription_tier: String,
    pub is_pro: bool,
    pub words_used: i64,
    pub word_limit: i64,
}

/// POST /api/v1/auth/register
///
/// Creates the profile row (tier `free`) and returns a bearer token.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = request.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    if request.password.len() < 8 {
        return Err(AppError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    if profiles::get_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::Validation(
            "an account with this email already exists".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&request.password)?;
    let profile = profiles::create_profile(&state.db, &email, &password_hash).await?;

    tracing::info!("Registered new profile {}", profile.id);

    let token = auth::issue_token(profile.id, &state.config.jwt_secret)?;
    Ok(Json(AuthResponse { token }))
}

/// POST /api/v1/auth/login
///
/// Verifies credentials and returns a bearer token. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = request.email.trim().to_lowercase();

    let profile = profiles::get_by_email(&state.db, &email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !auth::verify_password(&profile.password_hash, &request.password) {
        tracing::warn!("Failed login attempt for profile {}", profile.id);
        return Err(AppError::Unauthorized);
    }

    let token = auth::issue_token(profile.id, &state.config.jwt_secret)?;
    Ok(Json(AuthResponse { token }))
}

/// GET /api/v1/me
///
/// Returns the caller's profile with the effective usage for the current
/// month, which the dashboard renders as the word meter.
pub async fn handle_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MeResponse>, AppError> {
    let profile = profiles::get_by_id(&state.db, user.user_id).await?;

    let month = quota::month_key(chrono::Utc::now());
    let plan = Plan::from_tier(&profile.subscription_tier);

    Ok(Json(MeResponse {
        id: profile.id,
        email: profile.email.clone(),
        subscription_tier: profile.subscription_tier.clone(),
        is_pro: profile.is_pro,
        words_used: quota::effective_usage(&profile, &month),
        word_limit: plan.word_limit(),
    }))
}
