//! Liveness and health check handlers.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use jiff::Timestamp;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{HealthResponse, HealthStatus};
use crate::state::AppState;
use crate::store::Query;

/// Body of the liveness endpoint.
pub const ALIVE_MESSAGE: &str = "alive 💪";

// Collection that is never written; querying it only proves the store answers
const PROBE_COLLECTION: &str = "_health";

/// `GET /` relative to the API base path.
pub fn alive_routes() -> Router<AppState> {
    Router::new().route("/", get(alive))
}

/// `GET /health` at the server root.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe. Touches nothing but the router.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = HEALTH_TAG
)]
pub async fn alive() -> &'static str {
    ALIVE_MESSAGE
}

/// Health check including a document store probe.
///
/// # Responses
/// - `200 OK` - Service and store are healthy
/// - `503 Service Unavailable` - The store did not answer
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = match state.store.query(PROBE_COLLECTION, Query::new().limit(1)).await {
        Ok(_) => HealthStatus::Healthy,
        Err(e) => {
            tracing::warn!(error = %e, "store health probe failed");
            HealthStatus::Unhealthy
        }
    };

    let status = match store {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    let response = HealthResponse {
        status: store,
        version: crate::pkg_version().to_string(),
        timestamp: Timestamp::now().to_string(),
        store,
    };

    (status, Json(response))
}
