use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::auth::models::user::User as UserModel;

/// User API data type
///
/// Public representation of an account: no password or reset-code material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<UserModel> for UserData {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// Response for register/login: bearer token plus the account it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserData,
}
