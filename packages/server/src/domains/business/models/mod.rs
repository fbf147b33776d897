pub mod business;

pub use business::*;
