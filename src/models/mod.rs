//! Domain models stored as documents.

pub mod quiz;
pub mod user;

pub use quiz::{NewQuiz, Quiz};
pub use user::{NewUser, User};
