use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - Health check with credential store status
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.users.user_count() {
        Ok(users) => {
            let health = json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "components": {
                    "credential_store": "operational",
                },
                "users": users,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            });

            (StatusCode::OK, Json(health)).into_response()
        }
        Err(e) => {
            log::error!("Health check failed: {}", e);

            let health = json!({
                "status": "unhealthy",
                "version": env!("CARGO_PKG_VERSION"),
                "components": {
                    "credential_store": "unavailable",
                },
                "timestamp": chrono::Utc::now().to_rfc3339(),
            });

            (StatusCode::SERVICE_UNAVAILABLE, Json(health)).into_response()
        }
    }
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // If we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.users.user_count() {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
