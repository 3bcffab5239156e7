//! Monthly word allowance arithmetic. Pure functions; the profile row holds
//! the counter and `humanize` applies the gate before any external call.

use chrono::{DateTime, Datelike, Utc};

use crate::models::profile::ProfileRow;

/// Whitespace-separated token count; the unit the pricing page sells.
pub fn word_count(text: &str) -> i64 {
    text.split_whitespace().count() as i64
}

/// Month key for the usage counter, e.g. "2026-08".
pub fn month_key(now: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", now.year(), now.month())
}

/// Words already consumed in `current_month`. A counter stamped with an
/// older month has rolled over and reads as zero.
pub fn effective_usage(profile: &ProfileRow, current_month: &str) -> i64 {
    if profile.usage_month == current_month {
        profile.words_used
    } else {
        0
    }
}

/// True when accepting `incoming` words would push usage past the limit.
pub fn would_exceed(limit: i64, used: i64, incoming: i64) -> bool {
    used.saturating_add(incoming) > limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile_with_usage(words_used: i64, usage_month: &str) -> ProfileRow {
        ProfileRow {
            id: uuid::Uuid::new_v4(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            subscription_tier: "free".to_string(),
            is_pro: false,
            words_used,
            usage_month: usage_month.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        assert_eq!(word_count("one two\tthree\nfour"), 4);
        assert_eq!(word_count("   padded   words   "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t  "), 0);
    }

    #[test]
    fn test_month_key_is_zero_padded() {
        let march = Utc.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(month_key(march), "2026-03");
        let november = Utc.with_ymd_and_hms(2026, 11, 30, 23, 59, 59).unwrap();
        assert_eq!(month_key(november), "2026-11");
    }

    #[test]
    fn test_effective_usage_counts_current_month() {
        let profile = profile_with_usage(420, "2026-08");
        assert_eq!(effective_usage(&profile, "2026-08"), 420);
    }

    #[test]
    fn test_effective_usage_resets_after_rollover() {
        let profile = profile_with_usage(999, "2026-07");
        assert_eq!(effective_usage(&profile, "2026-08"), 0);
    }

    #[test]
    fn test_would_exceed_boundary() {
        // Exactly reaching the limit is allowed; one more word is not.
        assert!(!would_exceed(1000, 900, 100));
        assert!(would_exceed(1000, 900, 101));
    }

    #[test]
    fn test_would_exceed_saturates_on_huge_input() {
        assert!(would_exceed(1000, i64::MAX, 1));
    }
}
