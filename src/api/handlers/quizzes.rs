//! Quiz request handlers.

use axum::{Json, Router, extract::State, routing::get};
use jiff::Timestamp;

use crate::api::doc::QUIZ_TAG;
use crate::api::dto::{CreateQuizRequest, ErrorResponse, QuizEnvelope, QuizListResponse};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates quiz-related routes.
///
/// Routes:
/// - POST /quizzes - Create a new quiz
/// - GET  /quizzes - Ten most recent quizzes
pub fn quiz_routes() -> Router<AppState> {
    Router::new().route("/quizzes", get(list_quizzes).post(create_quiz))
}

/// Creates a quiz.
///
/// `createdOn` comes from the server clock and `userCount` starts at 0;
/// neither can be supplied by the client.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = CreateQuizRequest,
    responses(
        (status = 200, description = "Quiz created", body = QuizEnvelope),
        (status = 400, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = QUIZ_TAG
)]
pub async fn create_quiz(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuizRequest>,
) -> AppResult<Json<QuizEnvelope>> {
    let quiz = state
        .repositories
        .quizzes
        .create(payload.into_new_quiz(Timestamp::now()))
        .await?;

    tracing::info!(quiz_id = %quiz.id, "quiz created");
    Ok(Json(quiz.into()))
}

/// Lists the ten most recently created quizzes, newest first.
#[utoipa::path(
    get,
    path = "/quizzes",
    responses(
        (status = 200, description = "Recent quizzes", body = QuizListResponse),
        (status = 503, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = QUIZ_TAG
)]
pub async fn list_quizzes(State(state): State<AppState>) -> AppResult<Json<QuizListResponse>> {
    let quizzes = state.repositories.quizzes.list_recent().await?;
    Ok(Json(quizzes.into()))
}
