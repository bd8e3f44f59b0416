//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `user` - User-related request/response DTOs
//! - `quiz` - Quiz-related request/response DTOs
//! - `health` - Health check response
//! - `error` - Common error response DTOs

mod error;
mod health;
mod quiz;
mod user;

pub use error::ErrorResponse;
pub use health::{HealthResponse, HealthStatus};
pub use quiz::{CreateQuizRequest, QuizEnvelope, QuizListResponse, QuizResponse};
pub use user::{CreateUserRequest, UserEnvelope, UserPath, UserResponse};
