//! Profile store - reads and single-row writes against the `profiles` table.
//!
//! All entitlement mutation funnels through `set_entitlement`; callers are
//! responsible for gating it (payment signature checks live in `billing`).

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;

pub async fn create_profile(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<ProfileRow, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_by_id(pool: &PgPool, user_id: Uuid) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {user_id} not found")))
}

pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<ProfileRow>, AppError> {
    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(profile)
}

/// Applies a paid entitlement to a profile. Last write wins.
pub async fn set_entitlement(
    pool: &PgPool,
    user_id: Uuid,
    tier: &str,
    is_pro: bool,
) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE profiles
        SET subscription_tier = $2, is_pro = $3, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(tier)
    .bind(is_pro)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Profile {user_id} not found")));
    }

    Ok(())
}

/// Adds `words` to the monthly counter, resetting it first if the stored
/// month is not `month`. One statement, no coordination needed.
pub async fn record_usage(
    pool: &PgPool,
    user_id: Uuid,
    words: i64,
    month: &str,
) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE profiles
        SET words_used = CASE WHEN usage_month = $2 THEN words_used + $3 ELSE $3 END,
            usage_month = $2,
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(month)
    .bind(words)
    .execute(pool)
    .await?;

    Ok(())
}
