//! service-core: Shared infrastructure for the log analyzer workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
