//! User request handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::api::doc::USER_TAG;
use crate::api::dto::{CreateUserRequest, ErrorResponse, UserEnvelope, UserPath, UserResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedPath};

/// Creates user-related routes.
///
/// Routes:
/// - POST /users            - Create a new user
/// - GET  /users/{user_id}  - Get user by ID
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{user_id}", get(get_user))
}

/// Creates a user. New users start without quizzes.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserEnvelope),
        (status = 400, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state
        .repositories
        .users
        .create(payload.into_new_user())
        .await?;

    tracing::info!(user_id = %user.id, "user created");
    Ok(Json(user.into()))
}

/// Returns the user with the given id.
///
/// An id with no stored document is not an error: the body echoes the
/// requested id with no other fields.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(UserPath),
    responses(
        (status = 200, description = "User, or only its id if none is stored", body = UserEnvelope),
        (status = 400, description = "Invalid user id", body = ErrorResponse)
    ),
    tag = USER_TAG
)]
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(path): ValidatedPath<UserPath>,
) -> AppResult<Json<UserEnvelope>> {
    let user = state.repositories.users.find_by_id(&path.user_id).await?;

    let envelope = match user {
        Some(user) => user.into(),
        None => {
            tracing::debug!(user_id = %path.user_id, "no stored user for id");
            UserResponse::id_only(path.user_id).into()
        }
    };

    Ok(Json(envelope))
}
