use thiserror::Error;

/// Request-level errors for the FranchiseBridge platform
///
/// Every handler maps one of these to an HTTP status (see server::error).
/// Email delivery failures are deliberately absent: the decision email is
/// dispatched after the state transition commits and its failure is only
/// logged, never surfaced to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("A business with this email is already registered")]
    DuplicateEmail,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Admin access required")]
    Forbidden,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// True when a sqlx error is a unique-constraint violation.
    ///
    /// Used to turn the `businesses.email` / `users.email` unique index
    /// failures into `DuplicateEmail`.
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        err.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::Validation("email is required".to_string()).to_string(),
            "Validation failed: email is required"
        );
        assert_eq!(
            ApiError::NotFound("Notification").to_string(),
            "Notification not found"
        );
        assert_eq!(
            ApiError::DuplicateEmail.to_string(),
            "A business with this email is already registered"
        );
    }
}
