//! Humanize - tone-calibrated rewrite of pasted text.
//!
//! Flow: quota gate -> prompt build -> LLM call -> passthrough -> usage write.
//! The model's rewrite is returned as-is apart from trimming; this service
//! does no text analysis of its own.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::billing::plans::Plan;
use crate::errors::AppError;
use crate::humanize::prompts::build_humanize_prompt;
use crate::humanize::tone::Tone;
use crate::llm_client::GeminiClient;
use crate::profiles;
use crate::quota;

pub mod handlers;
pub mod prompts;
pub mod tone;

/// Result of one rewrite, including the usage meter the dashboard shows.
#[derive(Debug)]
pub struct HumanizeOutcome {
    pub humanized_text: String,
    pub words_used: i64,
    pub word_limit: i64,
}

/// Runs one humanize request for an authenticated user.
///
/// The quota gate sits before the external call: a request that would blow
/// the monthly allowance never reaches the provider. Usage is recorded only
/// after a successful rewrite.
pub async fn humanize_text(
    pool: &PgPool,
    llm: &GeminiClient,
    user_id: Uuid,
    text: &str,
    tone: Tone,
) -> Result<HumanizeOutcome, AppError> {
    let profile = profiles::get_by_id(pool, user_id).await?;

    let plan = Plan::from_tier(&profile.subscription_tier);
    let month = quota::month_key(chrono::Utc::now());
    let used = quota::effective_usage(&profile, &month);
    let incoming = quota::word_count(text);

    if quota::would_exceed(plan.word_limit(), used, incoming) {
        return Err(AppError::QuotaExceeded(format!(
            "monthly word limit reached ({} of {} words used)",
            used,
            plan.word_limit()
        )));
    }

    let prompt = build_humanize_prompt(tone, text);
    let response = llm
        .call(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("humanize call failed: {e}")))?;

    let humanized_text = response
        .text()
        .map(|t| t.trim().to_string())
        .ok_or_else(|| AppError::Llm("humanize call returned no text".to_string()))?;

    profiles::record_usage(pool, user_id, incoming, &month).await?;

    info!(
        "Humanized {} words for user {} (tone: {})",
        incoming,
        user_id,
        tone.name()
    );

    Ok(HumanizeOutcome {
        humanized_text,
        words_used: used + incoming,
        word_limit: plan.word_limit(),
    })
}
