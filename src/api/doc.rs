use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;

use crate::api::dto;
use crate::api::handlers::{health, quizzes, users};

pub const USER_TAG: &str = "Users";
pub const QUIZ_TAG: &str = "Quizzes";
pub const HEALTH_TAG: &str = "Health";

/// Routes served at the server root.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz Zone",
        description = "REST API for users and quizzes",
    ),
    paths(health::health_check),
    components(
        schemas(
            dto::CreateUserRequest,
            dto::UserEnvelope,
            dto::UserResponse,
            dto::CreateQuizRequest,
            dto::QuizEnvelope,
            dto::QuizResponse,
            dto::QuizListResponse,
            dto::HealthResponse,
            dto::HealthStatus,
            dto::ErrorResponse,
            crate::error::ValidationFieldError,
        )
    ),
    tags(
        (name = USER_TAG, description = "User endpoints"),
        (name = QUIZ_TAG, description = "Quiz endpoints"),
        (name = HEALTH_TAG, description = "Liveness and health endpoints"),
    )
)]
pub struct ApiDoc;

/// Routes served under the configurable base path.
#[derive(OpenApi)]
#[openapi(paths(
    health::alive,
    users::create_user,
    users::get_user,
    quizzes::create_quiz,
    quizzes::list_quizzes,
))]
struct ResourcesDoc;

/// Full document with resource paths prefixed by `base_path`.
pub fn openapi(base_path: &str) -> OpenApiDocument {
    let doc = ApiDoc::openapi();
    if base_path.is_empty() {
        doc.merge_from(ResourcesDoc::openapi())
    } else {
        doc.nest(base_path, ResourcesDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_prefixed_with_base_path() {
        let doc = openapi("/api");
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| *p == "/api/users/{user_id}"));
        assert!(paths.iter().any(|p| *p == "/api/quizzes"));
        assert!(paths.iter().any(|p| *p == "/health"));
    }

    #[test]
    fn test_empty_base_path_keeps_resource_paths() {
        let doc = openapi("");
        assert!(doc.paths.paths.contains_key("/users"));
    }

    #[test]
    fn test_schemas_registered() {
        let doc = openapi("/api");
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("QuizListResponse"));
    }
}
