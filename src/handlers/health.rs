use super::{plain_text, PlainText};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// GET / handler - Liveness check
///
/// Always answers `Ok` without touching the store.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn root_handler() -> PlainText {
    plain_text("Ok")
}

/// GET /health handler - Readiness check
///
/// Pings the Storage Adapter. Returns 200 OK if it is reachable,
/// 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Store is reachable", body = String, content_type = "text/plain"),
        (status = 503, description = "Store is unreachable", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, PlainText) {
    match state.store.ping().await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            (StatusCode::OK, plain_text("healthy"))
        }
        Err(e) => {
            tracing::error!("Health check failed: {:#}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                plain_text(format!("unhealthy: {}", e)),
            )
        }
    }
}
