//! Log analyzer service: sends batches of log records to a text-generation
//! model and returns its analysis.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
