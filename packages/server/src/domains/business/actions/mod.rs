//! Business actions
//!
//! Entry-point actions are called directly from the REST handlers. They do
//! the work synchronously and return values.

pub mod queries;
pub mod register_business;

pub use queries::*;
pub use register_business::*;
