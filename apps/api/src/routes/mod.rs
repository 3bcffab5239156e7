pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::billing::handlers as billing_handlers;
use crate::detect::handlers as detect_handlers;
use crate::humanize::handlers as humanize_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route("/api/v1/auth/register", post(auth_handlers::handle_register))
        .route("/api/v1/auth/login", post(auth_handlers::handle_login))
        .route("/api/v1/me", get(auth_handlers::handle_me))
        // Text services
        .route("/api/v1/humanize", post(humanize_handlers::handle_humanize))
        .route("/api/v1/detect", post(detect_handlers::handle_detect))
        // Billing
        .route(
            "/api/v1/billing/checkout",
            post(billing_handlers::handle_create_checkout),
        )
        .route(
            "/api/v1/billing/verify",
            post(billing_handlers::handle_verify_payment),
        )
        // Gateway webhook (signed, not bearer-authenticated)
        .route(
            "/api/v1/webhooks/razorpay",
            post(billing_handlers::handle_razorpay_webhook),
        )
        .with_state(state)
}
