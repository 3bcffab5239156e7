//! HMAC-SHA256 signature checks for the two Razorpay trust boundaries:
//! the browser payment callback and the server-to-server webhook.
//!
//! A passing check is the sole gate before any entitlement write.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies the checkout-callback signature: HMAC over
/// `"{order_id}|{payment_id}"` keyed with the API key secret.
pub fn verify_payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
    signature_hex: &str,
) -> bool {
    let data = format!("{order_id}|{payment_id}");
    verify_hex(key_secret.as_bytes(), data.as_bytes(), signature_hex)
}

/// Verifies the webhook signature: HMAC over the raw request body keyed
/// with the webhook secret. The body must be the exact received bytes.
pub fn verify_webhook_signature(webhook_secret: &str, body: &[u8], signature_hex: &str) -> bool {
    verify_hex(webhook_secret.as_bytes(), body, signature_hex)
}

fn verify_hex(secret: &[u8], data: &[u8], signature_hex: &str) -> bool {
    let Ok(signature) = hex::decode(signature_hex) else {
        return false;
    };

    // HMAC accepts keys of any length, but avoid unwrap outside tests
    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(data);

    // verify_slice is constant-time
    mac.verify_slice(&signature).is_ok()
}
