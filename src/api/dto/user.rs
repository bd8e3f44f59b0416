//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{NewUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    #[schema(value_type = String, min_length = 1, example = "Bob Builder")]
    pub name: Option<String>,
}

impl CreateUserRequest {
    /// Converts the validated request into a `NewUser`.
    ///
    /// Only called after validation, so `name` is present.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name.unwrap_or_default(),
        }
    }
}

/// Route parameters for `GET /users/{user_id}`.
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Path)]
pub struct UserPath {
    /// Store-assigned user id
    #[validate(length(min = 1, max = 1500, message = "user_id must be 1 to 1500 characters"))]
    pub user_id: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// User as returned by the API.
///
/// A lookup of an id with no stored document echoes only the id, so the
/// stored fields are left out of the body rather than rendered as null.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"id": "uAWoWFpknToBcdZ7GF59", "name": "Bob Builder", "quizIds": []}))]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_ids: Option<Vec<String>>,
}

impl UserResponse {
    /// Body for an id that has no stored document.
    pub fn id_only(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            quiz_ids: None,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: Some(user.name),
            quiz_ids: Some(user.quiz_ids),
        }
    }
}

/// `{"user": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

impl From<UserResponse> for UserEnvelope {
    fn from(user: UserResponse) -> Self {
        Self { user }
    }
}
