//! Async handler wrapper.
//!
//! Sits between the request plumbing and the routes. Whatever a handler
//! does, the client gets a JSON error body: error results already render
//! through `AppError`, and a panic while polling the handler is caught here
//! and turned into `AppError::Internal`. Error bodies leaving this layer
//! carry the request ID.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

pub async fn async_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().cloned();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            tracing::error!(method = %method, path = %path, panic = %message, "handler panicked");
            AppError::Internal {
                source: anyhow::anyhow!("handler panicked: {}", message),
            }
            .into_response()
        }
    };

    match request_id {
        Some(RequestId(id)) => stamp_request_id(response, &id),
        None => response,
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Re-renders an error body with `request_id` filled in.
///
/// Responses that did not come from the error pipeline pass through as-is.
fn stamp_request_id(mut response: Response, request_id: &str) -> Response {
    let Some(error) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    let (parts, _body) = response.into_parts();
    match serde_json::to_vec(&error.with_request_id(request_id)) {
        Ok(bytes) => Response::from_parts(parts, Body::from(bytes)),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize error response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
