use serde::{Deserialize, Serialize};

pub const LIVENESS_MESSAGE: &str = "Serverless GenAI Log Analyzer is running!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Success,
}

/// Body of a successful analysis: `{"status": "success", "analysis": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    pub analysis: String,
}

impl AnalysisResult {
    pub fn success(analysis: String) -> Self {
        Self {
            status: AnalysisStatus::Success,
            analysis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: LIVENESS_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_result_wire_shape() {
        let result = AnalysisResult::success("all quiet".to_string());

        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({ "status": "success", "analysis": "all quiet" })
        );
    }
}
