//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage probe (counts records)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::{AppState, STORAGE_BACKEND};

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage probe.
///
/// Returns 200 with the backend name and record count, 503 if the store
/// cannot be queried.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.parameter_repo.count_parameters().await {
        Ok(records) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "backend": STORAGE_BACKEND,
                "records": records,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unavailable",
                    "backend": STORAGE_BACKEND,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
