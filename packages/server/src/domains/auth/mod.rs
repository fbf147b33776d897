//! Auth domain - user accounts, bearer tokens, password reset
//!
//! Users register with email + password and receive a 24h JWT. Password
//! reset is OTP-based: a 6-digit code is emailed, stored hashed, and
//! invalidated after a fixed 10-minute window.

pub mod actions;
pub mod data;
pub mod jwt;
pub mod models;

// Re-export commonly used types
pub use data::{AuthPayload, UserData};
pub use jwt::{Claims, JwtService};
pub use models::user::User;
