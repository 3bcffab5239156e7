//! Axum route handler for the humanize endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::humanize::tone::Tone;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
    /// Tone name; unknown or missing values fall back to professional.
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub humanized_text: String,
    pub words_used: i64,
    pub word_limit: i64,
}

/// POST /api/v1/humanize
///
/// Rewrites the submitted text in the chosen tone. Empty text is rejected
/// before anything leaves the process.
pub async fn handle_humanize(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<HumanizeRequest>,
) -> Result<Json<HumanizeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let tone = request
        .tone
        .as_deref()
        .map(Tone::from_name)
        .unwrap_or_default();

    let outcome =
        super::humanize_text(&state.db, &state.llm, user.user_id, &request.text, tone).await?;

    Ok(Json(HumanizeResponse {
        humanized_text: outcome.humanized_text,
        words_used: outcome.words_used,
        word_limit: outcome.word_limit,
    }))
}
