//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{
    Json, Router,
    http::{HeaderValue, Method, Uri, header},
    middleware,
    routing::get,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::doc;
use crate::api::handlers::{health, quizzes, users};
use crate::api::middleware::{
    async_handler, global_error_handler, logging_middleware, request_id_middleware,
};
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID - generates/propagates request IDs
/// 2. Logging - logs requests with request IDs
/// 3. Async handler wrapper - catches panics, stamps request IDs on errors
/// 4. Global error handler - normalizes non-JSON error responses
///
/// # Routes
/// - `{base_path}/`, `{base_path}/users`, `{base_path}/quizzes`
/// - `/`, `/health`, `/api-docs/openapi.json` at the root
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let base_path = config.normalized_base_path();

    let api_routes = Router::new()
        .merge(health::alive_routes())
        .merge(users::user_routes())
        .merge(quizzes::quiz_routes());

    let openapi = doc::openapi(base_path);

    // nest("") is rejected by axum, so an empty base path mounts at the root
    let router = if base_path.is_empty() {
        Router::new().merge(api_routes)
    } else {
        Router::new()
            .merge(health::alive_routes())
            .nest(base_path, api_routes)
    };

    let mut router = router
        .merge(health::health_routes())
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .fallback(route_not_found)
        // Middleware is applied in reverse order - last added runs first
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(async_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware));

    if let Some(cors) = cors_layer(&config.cors_origins) {
        router = router.layer(cors);
    }

    router.with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found("route", "path", uri.path())
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
