//! Validating extractors.
//!
//! Each extractor pulls one part of the request (body, path or query),
//! deserializes it into a `Validate` schema and runs the schema's rules.
//! Any failure short-circuits with an [`AppError`] before the handler runs.
//! Input that does not match the schema's shape (wrong types, unknown keys)
//! and rule violations both become `ValidationErrors` naming the offending
//! field. Only unparseable input (malformed JSON, wrong content type) is a
//! plain `BadRequest`.

use std::fmt::Display;

use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult, ValidationFieldError};

/// Field name reported when the whole input has the wrong shape
const ROOT_FIELD: &str = "body";

/// JSON body validated against `T`'s rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// Route parameters validated against `T`'s rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

/// Query string validated against `T`'s rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

fn bad_request(message: String) -> AppError {
    AppError::BadRequest { message }
}

fn field_error(field: impl Into<String>, code: &str, message: impl Into<String>) -> AppError {
    AppError::ValidationErrors {
        errors: vec![ValidationFieldError {
            field: field.into(),
            code: code.to_string(),
            message: message.into(),
        }],
    }
}

/// Name between the first pair of backticks in a serde message, e.g.
/// ``unknown field `color`, expected ...``.
fn quoted_name(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(&message[start..start + len])
}

fn join_path(parent: &str, name: &str) -> String {
    let already_named = parent == name || parent.ends_with(&format!(".{}", name));
    if parent.is_empty() || parent == "." || already_named {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Maps a deserialization failure to the field it happened at.
///
/// Unknown and missing keys are reported at the map that holds them, so
/// their name comes from the serde message.
fn schema_error<E: Display>(error: serde_path_to_error::Error<E>) -> AppError {
    let path = error.path().to_string();
    let message = error.inner().to_string();

    if message.starts_with("unknown field") {
        let name = quoted_name(&message).unwrap_or(ROOT_FIELD);
        return field_error(join_path(&path, name), "unknown", message);
    }
    if message.starts_with("missing field") {
        let name = quoted_name(&message).unwrap_or(ROOT_FIELD);
        return field_error(join_path(&path, name), "required", message);
    }

    let field = if path == "." { ROOT_FIELD.to_string() } else { path };
    field_error(field, "type", message)
}

fn path_error(rejection: PathRejection) -> AppError {
    let PathRejection::FailedToDeserializePathParams(error) = &rejection else {
        return bad_request(rejection.body_text());
    };

    match error.kind() {
        ErrorKind::ParseErrorAtKey {
            key, expected_type, ..
        } => field_error(key, "type", format!("{} must be {}", key, expected_type)),
        ErrorKind::DeserializeError { key, message, .. } => field_error(key, "type", message),
        ErrorKind::InvalidUtf8InPathParam { key } => {
            field_error(key, "type", format!("{} is not valid UTF-8", key))
        }
        _ => bad_request(rejection.body_text()),
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        // Syntax and content type first; shape errors need the field path
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| bad_request(e.body_text()))?;
        let value: T = serde_path_to_error::deserialize(body).map_err(schema_error)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_error)?;
        value.validate()?;
        Ok(ValidatedPath(value))
    }
}

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Self> {
        let query = parts.uri.query().unwrap_or_default();
        let deserializer =
            serde_urlencoded::Deserializer::new(form_urlencoded::parse(query.as_bytes()));
        let value: T = serde_path_to_error::deserialize(deserializer).map_err(schema_error)?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}
