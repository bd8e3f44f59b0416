//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Standard error response format.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "code": "VALIDATION_ERROR",
    "message": "Request validation failed",
    "errors": [{"field": "name", "code": "required", "message": "name is required"}],
    "requestId": "2c9a4f0e-8f43-4a8e-9a51-5b0f1c3d7e21"
}))]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field violations, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationFieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            errors: None,
            details: None,
            request_id: None,
        }
    }

    pub fn validation_error(errors: Vec<ValidationFieldError>) -> Self {
        Self::new("VALIDATION_ERROR", "Request validation failed").with_errors(errors)
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new("NOT_FOUND", &format!("{} not found", entity)).with_details(
            serde_json::json!({
                "entity": entity,
                "field": field,
                "value": value,
            }),
        )
    }

    pub fn with_errors(mut self, errors: Vec<ValidationFieldError>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Adds details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}
