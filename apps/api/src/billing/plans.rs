//! Subscription plans - prices, tiers, and monthly word allowances.
//!
//! Price-id resolution mirrors the checkout contract: ids containing
//! "business" select the business plan, any other paid id selects pro.

use serde::{Deserialize, Serialize};

/// Business allowance is sold as "unlimited"; the counter still needs a cap.
const BUSINESS_WORD_LIMIT: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Business,
}

impl Plan {
    /// Resolves a checkout price id ("pro_monthly", "business_monthly", ...).
    /// Unknown paid ids fall back to pro.
    pub fn from_price_id(price_id: &str) -> Plan {
        if price_id == "free" {
            Plan::Free
        } else if price_id.contains("business") {
            Plan::Business
        } else {
            Plan::Pro
        }
    }

    /// Resolves the tier string stored on a profile row.
    /// Unknown tiers read as free, never as a paid plan.
    pub fn from_tier(tier: &str) -> Plan {
        match tier {
            "pro" => Plan::Pro,
            "business" => Plan::Business,
            _ => Plan::Free,
        }
    }

    /// Tier string persisted on the profile row.
    pub fn tier(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Business => "business",
        }
    }

    /// Monthly price in INR.
    pub fn amount_inr(&self) -> u64 {
        match self {
            Plan::Free => 0,
            Plan::Pro => 1_599,
            Plan::Business => 6_499,
        }
    }

    /// Order amount in paise (1 INR = 100 paise), the unit Razorpay expects.
    pub fn amount_paise(&self) -> u64 {
        self.amount_inr() * 100
    }

    /// Words per month the plan entitles the user to.
    pub fn word_limit(&self) -> i64 {
        match self {
            Plan::Free => 1_000,
            Plan::Pro => 50_000,
            Plan::Business => BUSINESS_WORD_LIMIT,
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Plan::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_id_resolution() {
        assert_eq!(Plan::from_price_id("free"), Plan::Free);
        assert_eq!(Plan::from_price_id("pro_monthly"), Plan::Pro);
        assert_eq!(Plan::from_price_id("business_monthly"), Plan::Business);
        // Unknown paid ids default to pro, matching the checkout contract
        assert_eq!(Plan::from_price_id("pro_yearly_v2"), Plan::Pro);
    }

    #[test]
    fn test_tier_resolution_never_upgrades_unknown() {
        assert_eq!(Plan::from_tier("pro"), Plan::Pro);
        assert_eq!(Plan::from_tier("business"), Plan::Business);
        assert_eq!(Plan::from_tier("free"), Plan::Free);
        assert_eq!(Plan::from_tier("enterprise"), Plan::Free);
        assert_eq!(Plan::from_tier(""), Plan::Free);
    }

    #[test]
    fn test_amounts_match_pricing_page() {
        assert_eq!(Plan::Pro.amount_inr(), 1_599);
        assert_eq!(Plan::Business.amount_inr(), 6_499);
        assert_eq!(Plan::Free.amount_inr(), 0);
    }

    #[test]
    fn test_paise_conversion() {
        assert_eq!(Plan::Pro.amount_paise(), 159_900);
        assert_eq!(Plan::Business.amount_paise(), 649_900);
    }

    #[test]
    fn test_word_limits_ordered_by_tier() {
        assert!(Plan::Free.word_limit() < Plan::Pro.word_limit());
        assert!(Plan::Pro.word_limit() < Plan::Business.word_limit());
        assert_eq!(Plan::Free.word_limit(), 1_000);
        assert_eq!(Plan::Pro.word_limit(), 50_000);
    }

    #[test]
    fn test_only_free_is_unpaid() {
        assert!(!Plan::Free.is_paid());
        assert!(Plan::Pro.is_paid());
        assert!(Plan::Business.is_paid());
    }
}
