//! Login action

use tracing::{debug, info};

use crate::common::ApiError;
use crate::domains::auth::data::AuthPayload;
use crate::domains::auth::models::user::{hash_secret, User};
use crate::kernel::ServerDeps;

/// Authenticate with email + password and return a bearer token.
///
/// Unknown email and wrong password both map to `InvalidCredentials` so the
/// response does not reveal which accounts exist.
pub async fn login(
    email: String,
    password: String,
    deps: &ServerDeps,
) -> Result<AuthPayload, ApiError> {
    let user = User::find_by_email(&email, &deps.db_pool)
        .await?
        .ok_or_else(|| {
            debug!(email = %email, "Login attempt for unknown email");
            ApiError::InvalidCredentials
        })?;

    if user.password_hash != hash_secret(&password) {
        debug!(user_id = %user.id, "Login attempt with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    info!(user_id = %user.id, "User logged in");

    let token = deps
        .jwt_service
        .create_token(user.id, user.email.clone(), user.is_admin)?;

    Ok(AuthPayload {
        token,
        user: user.into(),
    })
}
