//! Request and response models for the log analyzer.

pub mod analysis;
pub mod log_entry;

pub use analysis::{AnalysisResult, AnalysisStatus, HealthResponse};
pub use log_entry::{AnalysisRequest, LogEntry, LogRecord};
