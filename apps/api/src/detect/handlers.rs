//! Axum route handler for the detect endpoint.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::detect::DetectionReport;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

/// POST /api/v1/detect
///
/// Scores the submitted text for likely machine authorship. Empty text is
/// rejected before anything leaves the process. Detection does not consume
/// the monthly word quota.
pub async fn handle_detect(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectionReport>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let report = super::detect_text(&state.llm, &request.text).await?;

    Ok(Json(report))
}
