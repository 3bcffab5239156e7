//! Axum route handlers for the billing flow: order creation, the browser
//! payment callback, and the gateway webhook.

use axum::{extract::State, http::HeaderMap, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::billing::plans::Plan;
use crate::billing::signature::{verify_payment_signature, verify_webhook_signature};
use crate::errors::AppError;
use crate::profiles;
use crate::state::AppState;

const WEBHOOK_SIGNATURE_HEADER: &str = "X-Razorpay-Signature";

// ----------------------------------------------------------------------------
// Request / Response types
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub price_id: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub amount: u64,
    pub currency: String,
    /// Public key id for the browser checkout modal.
    pub key_id: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    pub price_id: String,
}

// ----------------------------------------------------------------------------
// Handlers
// ----------------------------------------------------------------------------

/// POST /api/v1/billing/checkout
///
/// Creates a gateway order for the requested plan. The amount is resolved
/// server-side from the price id; nothing from the client is trusted for it.
pub async fn handle_create_checkout(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let plan = Plan::from_price_id(&request.price_id);
    if !plan.is_paid() {
        return Err(AppError::Validation(
            "price_id does not name a paid plan".to_string(),
        ));
    }

    let order = state
        .razorpay
        .create_order(user.user_id, plan)
        .await
        .map_err(|e| AppError::Payment(format!("order creation failed: {e}")))?;

    tracing::info!(
        "Order {} created for user {} ({})",
        order.id,
        user.user_id,
        plan.tier()
    );

    Ok(Json(CheckoutResponse {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: state.razorpay.key_id().to_string(),
    }))
}

/// POST /api/v1/billing/verify
///
/// Browser callback after a completed checkout. The recomputed HMAC over
/// `"{order_id}|{payment_id}"` is the sole gate: on mismatch nothing is
/// written. On match the authenticated caller's entitlement is upgraded.
pub async fn handle_verify_payment(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let valid = verify_payment_signature(
        state.razorpay.key_secret(),
        &request.razorpay_order_id,
        &request.razorpay_payment_id,
        &request.razorpay_signature,
    );

    if !valid {
        tracing::warn!(
            "Invalid payment signature for order {} (user {})",
            request.razorpay_order_id,
            user.user_id
        );
        return Err(AppError::PaymentVerification);
    }

    let plan = Plan::from_price_id(&request.price_id);
    profiles::set_entitlement(&state.db, user.user_id, plan.tier(), true).await?;

    tracing::info!(
        "Payment {} verified, user {} upgraded to {}",
        request.razorpay_payment_id,
        user.user_id,
        plan.tier()
    );

    Ok(Json(json!({ "success": true })))
}

/// POST /api/v1/webhooks/razorpay
///
/// Gateway webhook. Recomputes the HMAC over the raw body before trusting
/// the payload; a missing or wrong signature rejects with no state change.
/// Captured payments upgrade the profile named in the order notes.
pub async fn handle_razorpay_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let signature = headers
        .get(WEBHOOK_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Webhook request missing signature header");
            AppError::PaymentVerification
        })?;

    if !verify_webhook_signature(&state.config.razorpay_webhook_secret, &body, signature) {
        tracing::warn!("Webhook signature mismatch");
        return Err(AppError::PaymentVerification);
    }

    match entitlement_from_event(&body) {
        Ok(Some(capture)) => match capture.user_id {
            Some(user_id) => {
                let plan = Plan::from_price_id(capture.plan.as_deref().unwrap_or("pro"));
                profiles::set_entitlement(&state.db, user_id, plan.tier(), true).await?;
                tracing::info!("Webhook: user {} upgraded to {}", user_id, plan.tier());
            }
            None => {
                tracing::warn!("Webhook payment carried no user_id note; skipping");
            }
        },
        Ok(None) => {
            tracing::debug!("Webhook event ignored");
        }
        Err(e) => {
            return Err(AppError::Validation(format!("malformed webhook body: {e}")));
        }
    }

    Ok(Json(json!({ "received": true })))
}

// ----------------------------------------------------------------------------
// Webhook payload parsing
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WebhookEvent {
    event: String,
    payload: Option<WebhookPayload>,
}

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    payment: Option<WebhookPayment>,
}

#[derive(Debug, Deserialize)]
struct WebhookPayment {
    entity: Option<PaymentEntity>,
}

#[derive(Debug, Deserialize)]
struct PaymentEntity {
    #[serde(default)]
    notes: PaymentNotes,
}

/// Order notes echoed back by the gateway. Free-form on the wire, so both
/// fields are optional.
#[derive(Debug, Default, Deserialize)]
struct PaymentNotes {
    user_id: Option<Uuid>,
    plan: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct PaymentCapture {
    pub user_id: Option<Uuid>,
    pub plan: Option<String>,
}

/// Extracts the entitlement to apply from a verified webhook body.
/// Returns `None` for events that do not confirm a payment.
fn entitlement_from_event(body: &[u8]) -> Result<Option<PaymentCapture>, serde_json::Error> {
    let event: WebhookEvent = serde_json::from_slice(body)?;

    if event.event != "payment.captured" && event.event != "order.paid" {
        return Ok(None);
    }

    let notes = event
        .payload
        .and_then(|p| p.payment)
        .and_then(|p| p.entity)
        .map(|e| e.notes)
        .unwrap_or_default();

    Ok(Some(PaymentCapture {
        user_id: notes.user_id,
        plan: notes.plan,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_payment_yields_entitlement() {
        let body = br#"{"event":"payment.captured","payload":{"payment":{"entity":{"id":"pay_29QQoUBi66xm2f","notes":{"user_id":"5f8b2a66-9d3c-4f6e-9b1a-2c7d8e4f0a13","plan":"pro"}}}}}"#;
        let capture = entitlement_from_event(body).unwrap().unwrap();
        assert_eq!(
            capture.user_id,
            Some("5f8b2a66-9d3c-4f6e-9b1a-2c7d8e4f0a13".parse().unwrap())
        );
        assert_eq!(capture.plan.as_deref(), Some("pro"));
    }

    #[test]
    fn test_order_paid_counts_as_confirmation() {
        let body = br#"{"event":"order.paid","payload":{"payment":{"entity":{"id":"pay_1","notes":{}}}}}"#;
        let capture = entitlement_from_event(body).unwrap().unwrap();
        assert_eq!(capture.user_id, None);
        assert_eq!(capture.plan, None);
    }

    #[test]
    fn test_unrelated_event_is_ignored() {
        let body = br#"{"event":"payment.failed","payload":{"payment":{"entity":{"id":"pay_1","notes":{"user_id":"5f8b2a66-9d3c-4f6e-9b1a-2c7d8e4f0a13"}}}}}"#;
        assert_eq!(entitlement_from_event(body).unwrap(), None);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(entitlement_from_event(b"not json").is_err());
    }

    #[test]
    fn test_missing_payload_still_parses() {
        let body = br#"{"event":"payment.captured"}"#;
        let capture = entitlement_from_event(body).unwrap().unwrap();
        assert_eq!(capture.user_id, None);
    }

    #[test]
    fn test_non_uuid_user_note_fails_parse() {
        // A user_id note that is not a UUID cannot silently upgrade anyone
        let body = br#"{"event":"payment.captured","payload":{"payment":{"entity":{"notes":{"user_id":"42"}}}}}"#;
        assert!(entitlement_from_event(body).is_err());
    }
}
