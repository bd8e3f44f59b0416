//! Quiz repository over the `quizzes` collection.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::quiz::CREATED_ON;
use crate::models::{NewQuiz, Quiz};
use crate::repositories::QUIZZES_COLLECTION;
use crate::store::{Direction, DocumentStore, Query, StoreError};

/// Number of quizzes returned by [`QuizRepository::list_recent`]
pub const RECENT_QUIZZES_LIMIT: usize = 10;

#[derive(Clone)]
pub struct QuizRepository {
    store: Arc<dyn DocumentStore>,
}

impl QuizRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Stores a new quiz and returns the document as persisted.
    pub async fn create(&self, new_quiz: NewQuiz) -> AppResult<Quiz> {
        let id = self
            .store
            .add(QUIZZES_COLLECTION, new_quiz.into_fields())
            .await
            .map_err(AppError::store("create quiz"))?;

        tracing::debug!(quiz_id = %id, "quiz created");

        self.find_by_id(&id).await?.ok_or_else(|| {
            AppError::store("read created quiz")(StoreError::Operation(format!(
                "quiz {} vanished after creation",
                id
            )))
        })
    }

    pub async fn find_by_id(&self, quiz_id: &str) -> AppResult<Option<Quiz>> {
        let doc = self
            .store
            .get(QUIZZES_COLLECTION, quiz_id)
            .await
            .map_err(AppError::store("get quiz"))?;

        doc.map(Quiz::try_from)
            .transpose()
            .map_err(AppError::store("decode quiz"))
    }

    /// Most recently created quizzes, newest first.
    pub async fn list_recent(&self) -> AppResult<Vec<Quiz>> {
        let query = Query::new()
            .order_by(CREATED_ON, Direction::Descending)
            .limit(RECENT_QUIZZES_LIMIT);

        self.store
            .query(QUIZZES_COLLECTION, query)
            .await
            .map_err(AppError::store("list quizzes"))?
            .into_iter()
            .map(Quiz::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::store("decode quiz"))
    }
}
