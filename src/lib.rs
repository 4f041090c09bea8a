pub mod config;
pub mod core;
pub mod error;
pub mod json;
pub mod persist;
pub mod templates;
pub mod tracking;

pub use error::RoutineError;
