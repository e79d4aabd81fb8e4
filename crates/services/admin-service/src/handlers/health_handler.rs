//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};

use crate::state::AppState;

const SERVICE_NAME: &str = "admin-service";

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies database and cache connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let report = state.health.check(SERVICE_NAME).await;

    if report.is_healthy() {
        (StatusCode::OK, Json(report)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(report)).into_response()
    }
}
