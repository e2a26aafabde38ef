use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

/// Liveness check. Does not touch the store.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Readiness check: 200 once the store answers a ping, 503 otherwise.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .store
        .health_check()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Store ping failed");
            AppError::ServiceUnavailable
        })?;
    Ok(StatusCode::OK)
}
