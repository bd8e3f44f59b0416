//! Repository layer for data access operations.
//!
//! Translates typed models to and from documents in the store.

mod quiz_repo;
mod user_repo;

pub use quiz_repo::{QuizRepository, RECENT_QUIZZES_LIMIT};
pub use user_repo::UserRepository;

use std::sync::Arc;

use crate::store::DocumentStore;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Collection holding quiz documents
pub const QUIZZES_COLLECTION: &str = "quizzes";

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps the reference count of the shared store handle.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub quizzes: QuizRepository,
}

impl Repositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            quizzes: QuizRepository::new(store),
        }
    }
}
