//! Notification actions
//!
//! Entry-point actions are called directly from the REST handlers.

pub mod list_pending;
pub mod review;

pub use list_pending::*;
pub use review::*;
