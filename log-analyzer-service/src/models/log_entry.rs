use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One caller-supplied log event.
///
/// Any JSON object is accepted; key order is preserved.
pub type LogRecord = Map<String, Value>;

/// Wire wrapper around a single record: `{"log_data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_data: LogRecord,
}

/// Body of `POST /analyze-log`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub logs: Vec<LogEntry>,
}

impl AnalysisRequest {
    /// Unwraps the entries into their records, keeping order.
    pub fn into_records(self) -> Vec<LogRecord> {
        self.logs.into_iter().map(|entry| entry.log_data).collect()
    }
}
