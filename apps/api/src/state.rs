use sqlx::PgPool;

use crate::billing::razorpay::RazorpayClient;
use crate::config::Config;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: GeminiClient,
    pub razorpay: RazorpayClient,
    pub config: Config,
}
