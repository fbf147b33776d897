// Domain modules - each domain owns its models, data types, and actions

pub mod auth;
pub mod business;
pub mod notification;
