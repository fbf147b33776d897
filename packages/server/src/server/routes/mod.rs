// HTTP routes
pub mod auth;
pub mod businesses;
pub mod health;
pub mod notifications;

pub use auth::*;
pub use businesses::*;
pub use health::*;
pub use notifications::*;
