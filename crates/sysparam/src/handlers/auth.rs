//! Mock login and verification handlers.

use axum::{extract::rejection::JsonRejection, extract::State, response::IntoResponse, Json};
use serde_json::json;

use sysparam_core::auth::{authenticate, verify_code, LoginRequest, VerifyRequest};

use crate::{context::RequestContext, handlers::ApiError, state::AppState};

/// Accept any non-empty credentials (POST /api/auth/login).
pub async fn login(
    ctx: RequestContext,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    let user = authenticate(&request)?;

    tracing::info!(request_id = %ctx.request_id, username = %user.username, "Login succeeded");

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "user": user,
    })))
}

/// Accept any non-empty code and mode (POST /api/auth/verify).
pub async fn verify(
    ctx: RequestContext,
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    verify_code(&request)?;

    tracing::info!(request_id = %ctx.request_id, mode = %request.mode, "Verification succeeded");

    Ok(Json(json!({
        "success": true,
        "message": "Verification successful",
        "token": state.config.mock_token,
    })))
}
