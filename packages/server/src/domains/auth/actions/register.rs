//! Register user action

use tracing::{info, warn};

use crate::common::ApiError;
use crate::domains::auth::data::AuthPayload;
use crate::domains::auth::models::user::{hash_secret, is_admin_email, User};
use crate::kernel::ServerDeps;

/// Register a new account and return a bearer token.
///
/// Admin status is derived from the configured admin email list, never from
/// client input.
pub async fn register_user(
    name: String,
    email: String,
    password: String,
    deps: &ServerDeps,
) -> Result<AuthPayload, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation("name is required".to_string()));
    }
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ApiError::Validation("a valid email is required".to_string()));
    }
    if password.len() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }

    let is_admin = is_admin_email(&email, &deps.admin_emails);

    let user = match User::create(
        &name,
        &email,
        &hash_secret(&password),
        is_admin,
        &deps.db_pool,
    )
    .await
    {
        Ok(user) => user,
        Err(e) if ApiError::is_unique_violation(&e) => {
            warn!(email = %email, "Duplicate account registration rejected");
            return Err(ApiError::DuplicateEmail);
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = %user.id, is_admin = user.is_admin, "User registered");

    let token = deps
        .jwt_service
        .create_token(user.id, user.email.clone(), user.is_admin)?;

    Ok(AuthPayload {
        token,
        user: user.into(),
    })
}
