use crate::models::{AnalysisRequest, AnalysisResult};
use crate::startup::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `POST /analyze-log`: analyze a batch of log entries.
pub async fn analyze_log(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected analysis request body");
        AppError::RejectedBody(rejection.status(), rejection.body_text())
    })?;

    let records = request.into_records();
    let result = state.analyzer.analyze(&records).await?;

    Ok(Json(result))
}
