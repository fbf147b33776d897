// FranchiseBridge - API Core
//
// This crate provides the backend API for matching franchise businesses with
// investors. Architecture follows domain-driven design: thin REST handlers
// delegating to per-domain actions and models.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
