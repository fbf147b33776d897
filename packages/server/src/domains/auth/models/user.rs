use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

/// How long an emailed reset code stays valid
const RESET_CODE_TTL_MINUTES: i64 = 10;

/// User - an account that can sign in and (if admin) review listings
///
/// Passwords and reset codes are stored hashed; raw secrets never touch the
/// database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub reset_code_hash: Option<String>,
    pub reset_code_sent_at: Option<DateTime<Utc>>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Insert a new user.
    ///
    /// A unique violation on `email` is surfaced as the raw sqlx error so the
    /// caller can map it to a duplicate-email failure.
    pub async fn create(
        name: &str,
        email: &str,
        password_hash: &str,
        is_admin: bool,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash, is_admin)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(is_admin)
        .fetch_one(pool)
        .await
    }

    /// Store a freshly issued reset code hash and its issuance time
    pub async fn set_reset_code(id: Uuid, code_hash: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "UPDATE users SET reset_code_hash = $2, reset_code_sent_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(code_hash)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Replace the password and consume the reset code
    pub async fn update_password(id: Uuid, password_hash: &str, pool: &PgPool) -> Result<()> {
        sqlx::query(
            "UPDATE users
             SET password_hash = $2, reset_code_hash = NULL, reset_code_sent_at = NULL
             WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// True when the stored reset code matches and is still inside its window
    pub fn reset_code_is_valid(&self, code: &str, now: DateTime<Utc>) -> bool {
        let (Some(stored_hash), Some(sent_at)) =
            (self.reset_code_hash.as_deref(), self.reset_code_sent_at)
        else {
            return false;
        };

        if now - sent_at > Duration::minutes(RESET_CODE_TTL_MINUTES) {
            return false;
        }

        stored_hash == hash_secret(code)
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Hash a secret (password or reset code) using SHA256
///
/// Secrets are hashed before storage; the hash is what gets compared on
/// login and reset.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check if an email should be granted admin privileges
///
/// Returns true if the email is in the admin_emails list (case-insensitive).
pub fn is_admin_email(email: &str, admin_emails: &[String]) -> bool {
    admin_emails
        .iter()
        .any(|admin| admin.eq_ignore_ascii_case(email))
}
