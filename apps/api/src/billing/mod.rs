// Billing: Razorpay order creation, payment-callback and webhook signature
// verification, and entitlement writes. All gateway calls go through
// `razorpay` and all mutation gates through `signature` checks.

pub mod handlers;
pub mod plans;
pub mod razorpay;
pub mod signature;
