//! Reset password action - consume a valid code and set the new password

use tracing::{info, warn};

use crate::common::ApiError;
use crate::domains::auth::models::user::{hash_secret, User};
use crate::kernel::ServerDeps;

/// Set a new password for the account, given a still-valid reset code.
///
/// Wrong, absent, and expired codes all fail the same way; the stored code
/// is consumed on success.
pub async fn reset_password(
    email: String,
    code: String,
    new_password: String,
    deps: &ServerDeps,
) -> Result<(), ApiError> {
    if new_password.len() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    let user = User::find_by_email(&email, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    if !user.reset_code_is_valid(&code, chrono::Utc::now()) {
        warn!(user_id = %user.id, "Password reset with invalid or expired code");
        return Err(ApiError::Validation(
            "reset code is invalid or has expired".to_string(),
        ));
    }

    User::update_password(user.id, &hash_secret(&new_password), &deps.db_pool).await?;

    info!(user_id = %user.id, "Password reset completed");

    Ok(())
}
