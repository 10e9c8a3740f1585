//! HTTP handlers for the log analyzer service.

pub mod analyze;
pub mod health;
