//! Quiz-related DTOs for API requests and responses.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewQuiz, Quiz};

/// Request body for creating a new quiz.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
#[schema(example = json!({
    "name": "Quiz 2",
    "description": "this is a quiz to do something",
    "active": false
}))]
pub struct CreateQuizRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    #[schema(value_type = String, min_length = 1)]
    pub name: Option<String>,
    /// Optional; must not be blank when supplied
    #[validate(length(min = 1, message = "description must not be empty"))]
    #[schema(min_length = 1)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(default = false)]
    pub active: bool,
}

impl CreateQuizRequest {
    /// Builds the quiz to store, stamped with the server's clock.
    pub fn into_new_quiz(self, created_on: Timestamp) -> NewQuiz {
        NewQuiz {
            name: self.name.unwrap_or_default(),
            description: self.description,
            active: self.active,
            created_on,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub active: bool,
    pub user_count: i64,
    #[schema(value_type = String, format = DateTime)]
    pub created_on: Timestamp,
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            name: quiz.name,
            description: quiz.description,
            active: quiz.active,
            user_count: quiz.user_count,
            created_on: quiz.created_on,
        }
    }
}

/// `{"quiz": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizEnvelope {
    pub quiz: QuizResponse,
}

impl From<Quiz> for QuizEnvelope {
    fn from(quiz: Quiz) -> Self {
        Self { quiz: quiz.into() }
    }
}

/// `{"quizzes": [...]}`, newest first
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizResponse>,
}

impl From<Vec<Quiz>> for QuizListResponse {
    fn from(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes: quizzes.into_iter().map(QuizResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(description: Option<&str>) -> Quiz {
        Quiz {
            id: "KltYLDxCbP5lX6BHWY9l".to_string(),
            name: "Quiz 2".to_string(),
            description: description.map(str::to_string),
            active: false,
            user_count: 0,
            created_on: "2020-07-23T00:52:47.643Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_quiz_response_camel_case_and_timestamp() {
        let body = serde_json::to_value(QuizEnvelope::from(quiz(Some("something")))).unwrap();

        assert_eq!(body["quiz"]["userCount"], 0);
        assert_eq!(body["quiz"]["createdOn"], "2020-07-23T00:52:47.643Z");
        assert_eq!(body["quiz"]["description"], "something");
    }

    #[test]
    fn test_absent_description_is_omitted() {
        let body = serde_json::to_value(QuizResponse::from(quiz(None))).unwrap();
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_create_quiz_request_defaults_and_rules() {
        let request: CreateQuizRequest = serde_json::from_str(r#"{"name":"Quiz 2"}"#).unwrap();
        assert!(request.validate().is_ok());
        let new_quiz = request.into_new_quiz(Timestamp::UNIX_EPOCH);
        assert!(!new_quiz.active);
        assert_eq!(new_quiz.description, None);

        let request: CreateQuizRequest =
            serde_json::from_str(r#"{"name":"Quiz 2","description":""}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_create_quiz_request_rejects_client_timestamp() {
        let result = serde_json::from_str::<CreateQuizRequest>(
            r#"{"name":"Quiz 2","createdOn":"2020-01-01T00:00:00Z"}"#,
        );
        assert!(result.is_err());
    }
}
