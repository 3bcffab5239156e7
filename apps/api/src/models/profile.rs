use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The one persisted entity: a user profile carrying identity, entitlement,
/// and the monthly usage counter. Updated last-write-wins by the auth,
/// billing, and humanize paths.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub subscription_tier: String,
    pub is_pro: bool,
    pub words_used: i64,
    /// Month the counter belongs to, `YYYY-MM`. A different current month
    /// means the counter is stale and reads as zero.
    pub usage_month: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
