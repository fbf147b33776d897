//! Business domain - franchise listing registration and queries
//!
//! A Business is a franchise listing submitted for admin review. Listings
//! enter with status `pending` and are moved to a terminal status by the
//! notification review workflow.

pub mod actions;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::BusinessData;
pub use models::business::{Business, CreateBusiness, ReviewStatus};
