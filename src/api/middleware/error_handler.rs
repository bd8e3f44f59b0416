//! Error handler for converting AppError to HTTP responses.
//!
//! `AppError` renders itself as an [`ErrorResponse`] with a matching status
//! code. The rendered body is also stored in the response extensions so
//! outer middleware can stamp the request ID onto it. Framework-level
//! failures (unmatched routes, wrong methods) are normalized into the same
//! shape by [`global_error_handler`].

use axum::{
    Json,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::{AppError, ValidationFieldError};
use crate::store::StoreError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Validation / ValidationErrors → 400 VALIDATION_ERROR
    /// - BadRequest → 400 BAD_REQUEST
    /// - Store (unavailable) → 503 SERVICE_UNAVAILABLE
    /// - Store (other) → 500 STORE_ERROR
    /// - Configuration → 500 CONFIGURATION_ERROR
    /// - Internal → 500 INTERNAL_ERROR
    ///
    /// Sources of 5xx errors are logged but never sent to the client.
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = ?self, code = error_to_code(&self), "request failed");
        } else {
            tracing::debug!(error = %self, code = error_to_code(&self), "request rejected");
        }

        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::not_found_error(entity, field, value),
            AppError::Validation { field, reason } => {
                ErrorResponse::validation_error(vec![ValidationFieldError {
                    field: field.clone(),
                    code: "invalid".to_string(),
                    message: reason.clone(),
                }])
            }
            AppError::ValidationErrors { errors } => {
                ErrorResponse::validation_error(errors.clone())
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Store {
                source: StoreError::Unavailable(_),
                ..
            } => ErrorResponse::new("SERVICE_UNAVAILABLE", "Document store unavailable"),
            AppError::Store { operation, .. } => ErrorResponse::new(
                "STORE_ERROR",
                &format!("Store operation failed: {}", operation),
            ),
            AppError::Configuration { key, .. } => ErrorResponse::new(
                "CONFIGURATION_ERROR",
                &format!("Configuration error: {}", key),
            ),
            AppError::Internal { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        error_response_with_status(status, error_response)
    }
}

/// Renders `body` with `status`, keeping a copy in the extensions.
pub(crate) fn error_response_with_status(status: StatusCode, body: ErrorResponse) -> Response {
    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(body);
    response
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Store {
            source: StoreError::Unavailable(_),
            ..
        } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Validation { .. } | AppError::ValidationErrors { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Store {
            source: StoreError::Unavailable(_),
            ..
        } => "SERVICE_UNAVAILABLE",
        AppError::Store { .. } => "STORE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Global error handling middleware that converts error responses without
/// a JSON body into the standard ErrorResponse format.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));
    if is_json {
        return response;
    }

    let (_parts, body) = response.into_parts();
    let original_message = axum::body::to_bytes(body, usize::MAX)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .unwrap_or_default();

    let (code, fallback) = match status {
        StatusCode::BAD_REQUEST => ("BAD_REQUEST", "Bad request - invalid or malformed request"),
        StatusCode::NOT_FOUND => ("NOT_FOUND", "The requested resource was not found"),
        StatusCode::METHOD_NOT_ALLOWED => (
            "METHOD_NOT_ALLOWED",
            "HTTP method not allowed for this endpoint",
        ),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported media type"),
        StatusCode::PAYLOAD_TOO_LARGE => ("PAYLOAD_TOO_LARGE", "Request payload too large"),
        StatusCode::SERVICE_UNAVAILABLE => {
            ("SERVICE_UNAVAILABLE", "Service temporarily unavailable")
        }
        s if s.is_server_error() => ("INTERNAL_SERVER_ERROR", "An internal server error occurred"),
        _ => ("UNKNOWN_ERROR", "An unknown error occurred"),
    };

    // Server error bodies may carry internals; only echo client error text
    let message = if original_message.is_empty() || status.is_server_error() {
        fallback.to_string()
    } else {
        original_message
    };

    error_response_with_status(status, ErrorResponse::new(code, &message))
}
