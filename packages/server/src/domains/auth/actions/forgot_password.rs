//! Forgot password action - issue and email a one-time reset code

use anyhow::Context;
use tracing::info;

use crate::common::ApiError;
use crate::domains::auth::models::user::{hash_secret, User};
use crate::kernel::ServerDeps;

/// Issue a 6-digit reset code for the account and email it.
///
/// The code is stored hashed with its issuance time; it expires after the
/// fixed 10-minute window (checked at reset time). Unlike the decision
/// email, this send is awaited: without the code the flow is dead, so a
/// delivery failure fails the request.
pub async fn forgot_password(email: String, deps: &ServerDeps) -> Result<(), ApiError> {
    let user = User::find_by_email(&email, &deps.db_pool)
        .await?
        .ok_or(ApiError::NotFound("User"))?;

    let code = generate_reset_code();
    User::set_reset_code(user.id, &hash_secret(&code), &deps.db_pool).await?;

    let body = format!(
        "Hello {},\n\n\
         Your password reset code is: {}\n\n\
         The code expires in 10 minutes. If you did not request a reset you \
         can ignore this email.\n\n\
         The FranchiseBridge Team",
        user.name, code
    );

    deps.mailer
        .send(&user.email, "Your password reset code", &body)
        .await
        .context("Failed to send reset code email")?;

    info!(user_id = %user.id, "Reset code issued and emailed");

    Ok(())
}

/// Generate a 6-digit one-time code, zero-padded
fn generate_reset_code() -> String {
    format!("{:06}", rand::random_range(0..1_000_000u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
