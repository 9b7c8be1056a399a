//! System parameter maker-checker handlers.
//!
//! Handlers validate and transition records through the pure functions in
//! `sysparam_core::parameter` and persist through the repository trait object.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use sysparam_core::parameter::{
    authorize, new_parameter, reject, validate_parameter, validate_rejection_reason,
    AuthorizeRequest, ListParametersQuery, RecordStatus, RejectRequest, SubmitParameterRequest,
    SystemParameter,
};

use crate::{context::RequestContext, handlers::ApiError, state::AppState};

const SUBMIT_FAILED: &str = "Failed to submit system parameter";
const FETCH_FAILED: &str = "Failed to fetch system parameters";
const AUTHORIZE_FAILED: &str = "Failed to authorize record";
const REJECT_FAILED: &str = "Failed to reject record";

/// Unparseable ids cannot name a stored record.
fn parse_record_id(record_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(record_id.trim()).map_err(|_| ApiError::record_not_found())
}

async fn load_record(
    state: &AppState,
    id: Uuid,
    failure: &'static str,
) -> Result<SystemParameter, ApiError> {
    state
        .parameter_repo
        .get_parameter(id)
        .await
        .map_err(|e| ApiError::from_repository(e, failure))?
        .ok_or_else(ApiError::record_not_found)
}

// ============================================================================
// Submit
// ============================================================================

/// Submit a new record for authorization (POST /api/system-parameter/submit).
pub async fn submit_parameter(
    ctx: RequestContext,
    State(state): State<AppState>,
    payload: Result<Json<SubmitParameterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;

    validate_parameter(&request.details)
        .into_result()
        .map_err(ApiError::Validation)?;

    let maker = ctx.actor_or(&state.config.default_maker);
    let parameter = new_parameter(request, maker, Utc::now());

    state
        .parameter_repo
        .create_parameter(&parameter)
        .await
        .map_err(|e| ApiError::from_repository(e, SUBMIT_FAILED))?;

    tracing::info!(
        request_id = %ctx.request_id,
        record_id = %parameter.id,
        product_type = %parameter.details.product_type,
        maker = %parameter.maker,
        "Submitted system parameter"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "System Parameter submitted successfully",
            "recordId": parameter.id,
        })),
    ))
}

// ============================================================================
// List / Get
// ============================================================================

/// List records in one status, newest first (GET /api/system-parameter/list).
pub async fn list_parameters(
    State(state): State<AppState>,
    query: Result<Query<ListParametersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let status = match query.status.as_deref() {
        Some(s) if !s.trim().is_empty() => s
            .parse::<RecordStatus>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        _ => RecordStatus::PendingAuthorization,
    };

    let parameters = state
        .parameter_repo
        .list_parameters_by_status(status)
        .await
        .map_err(|e| ApiError::from_repository(e, FETCH_FAILED))?;

    tracing::debug!(status = %status, count = parameters.len(), "Listed system parameters");

    Ok(Json(json!({
        "success": true,
        "data": parameters,
    })))
}

/// Get a single record (GET /api/system-parameter/{id}).
pub async fn get_parameter(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    let id = parse_record_id(&id)?;
    let parameter = load_record(&state, id, FETCH_FAILED).await?;

    Ok(Json(json!({
        "success": true,
        "data": parameter,
    })))
}

// ============================================================================
// Authorize / Reject
// ============================================================================

/// Authorize a pending record (POST /api/system-parameter/authorize).
pub async fn authorize_parameter(
    ctx: RequestContext,
    State(state): State<AppState>,
    payload: Result<Json<AuthorizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let id = parse_record_id(&request.record_id)?;

    let record = load_record(&state, id, AUTHORIZE_FAILED).await?;
    let checker = ctx.actor_or(&state.config.default_checker);
    let authorized = authorize(&record, checker, Utc::now())?;

    state
        .parameter_repo
        .update_parameter(&authorized)
        .await
        .map_err(|e| ApiError::from_repository(e, AUTHORIZE_FAILED))?;

    tracing::info!(
        request_id = %ctx.request_id,
        record_id = %id,
        checker = %authorized.checker.as_deref().unwrap_or_default(),
        "Authorized system parameter"
    );

    Ok(Json(json!({
        "success": true,
        "message": "Record authorized successfully",
        "data": authorized,
    })))
}

/// Reject a pending record with a reason (POST /api/system-parameter/reject).
///
/// The reason is checked before the record is looked up.
pub async fn reject_parameter(
    ctx: RequestContext,
    State(state): State<AppState>,
    payload: Result<Json<RejectRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let reason = validate_rejection_reason(&request.rejection_reason)?;
    let id = parse_record_id(&request.record_id)?;

    let record = load_record(&state, id, REJECT_FAILED).await?;
    let checker = ctx.actor_or(&state.config.default_checker);
    let rejected = reject(&record, checker, reason, Utc::now())?;

    state
        .parameter_repo
        .update_parameter(&rejected)
        .await
        .map_err(|e| ApiError::from_repository(e, REJECT_FAILED))?;

    tracing::info!(
        request_id = %ctx.request_id,
        record_id = %id,
        checker = %rejected.checker.as_deref().unwrap_or_default(),
        reason = %reason,
        "Rejected system parameter"
    );

    Ok(Json(json!({
        "success": true,
        "message": "Record rejected successfully",
        "data": rejected,
    })))
}
