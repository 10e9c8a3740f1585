use crate::models::HealthResponse;
use axum::Json;

/// Liveness probe. Does not touch the model provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
