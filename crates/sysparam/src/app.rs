use axum::{
    http::{header, HeaderName, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::{login, verify},
        health::{healthz, livez},
        system_parameter::{
            authorize_parameter, get_parameter, list_parameters, reject_parameter,
            submit_parameter,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-request-id"),
        ]);

    let api_routes = Router::new()
        // Mock auth routes
        .route("/auth/login", post(login))
        .route("/auth/verify", post(verify))
        // Maker-checker routes
        .route("/system-parameter/submit", post(submit_parameter))
        .route("/system-parameter/list", get(list_parameters))
        .route("/system-parameter/authorize", post(authorize_parameter))
        .route("/system-parameter/reject", post(reject_parameter))
        .route("/system-parameter/{id}", get(get_parameter))
        .layer(cors);

    let timeout = state.config.request_timeout();

    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
