//! Auth actions
//!
//! Entry-point actions are called directly from the REST handlers.

pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;

pub use forgot_password::*;
pub use login::*;
pub use register::*;
pub use reset_password::*;
