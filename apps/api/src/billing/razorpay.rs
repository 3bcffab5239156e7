//! Razorpay Orders API client - the single point of entry for all payment
//! gateway calls. One operation: create an order for a paid plan.

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::billing::plans::Plan;

const RAZORPAY_API_URL: &str = "https://api.razorpay.com/v1";
const CURRENCY: &str = "INR";

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct OrderRequest {
    /// Amount in paise.
    amount: u64,
    currency: &'static str,
    receipt: String,
    notes: OrderNotes,
}

/// Notes round-trip through the gateway and come back on the webhook,
/// which is how an asynchronous payment event finds its profile row.
#[derive(Debug, Serialize)]
struct OrderNotes {
    user_id: Uuid,
    plan: String,
}

#[derive(Debug, Deserialize)]
pub struct Order {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    error: RazorpayErrorBody,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
    description: Option<String>,
}

#[derive(Clone)]
pub struct RazorpayClient {
    client: Client,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            key_id,
            key_secret,
        }
    }

    /// The public key id; the browser checkout modal needs it.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The key secret doubles as the checkout-callback signing key.
    pub fn key_secret(&self) -> &str {
        &self.key_secret
    }

    /// Creates an order for `plan`, tagging it with the purchasing user so
    /// the webhook can reconcile the payment later.
    pub async fn create_order(&self, user_id: Uuid, plan: Plan) -> Result<Order, PaymentError> {
        let request_body = OrderRequest {
            amount: plan.amount_paise(),
            currency: CURRENCY,
            receipt: build_receipt(user_id, Utc::now().timestamp_millis()),
            notes: OrderNotes {
                user_id,
                plan: plan.tier().to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{RAZORPAY_API_URL}/orders"))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RazorpayError>(&body)
                .ok()
                .and_then(|e| e.error.description)
                .unwrap_or(body);
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let order: Order = response.json().await?;
        debug!(
            "Created order {} for user {} (status: {:?})",
            order.id, user_id, order.status
        );

        Ok(order)
    }
}

/// Receipt id: short user prefix plus a millisecond timestamp, unique
/// enough for the gateway's 40-char receipt field.
fn build_receipt(user_id: Uuid, millis: i64) -> String {
    let uid = user_id.to_string();
    format!("receipt_{}_{}", &uid[..10], millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_uses_user_prefix_and_timestamp() {
        let user_id = "5f8b2a66-9d3c-4f6e-9b1a-2c7d8e4f0a13".parse::<Uuid>().unwrap();
        let receipt = build_receipt(user_id, 1_754_000_000_000);
        assert_eq!(receipt, "receipt_5f8b2a66-9_1754000000000");
    }

    #[test]
    fn test_receipt_fits_gateway_limit() {
        // Razorpay caps receipts at 40 characters
        let receipt = build_receipt(Uuid::new_v4(), i64::MAX);
        assert!(receipt.len() <= 40, "receipt too long: {receipt}");
    }

    #[test]
    fn test_order_notes_serialize_for_webhook_roundtrip() {
        let user_id = Uuid::new_v4();
        let notes = OrderNotes {
            user_id,
            plan: Plan::Pro.tier().to_string(),
        };
        let value = serde_json::to_value(&notes).unwrap();
        assert_eq!(value["user_id"], serde_json::json!(user_id));
        assert_eq!(value["plan"], "pro");
    }
}
