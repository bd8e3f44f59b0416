//! User repository over the `users` collection.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::USERS_COLLECTION;
use crate::store::{DocumentStore, StoreError};

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Stores a new user and returns the document as persisted.
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let id = self
            .store
            .add(USERS_COLLECTION, new_user.into_fields())
            .await
            .map_err(AppError::store("create user"))?;

        tracing::debug!(user_id = %id, "user created");

        self.find_by_id(&id).await?.ok_or_else(|| {
            AppError::store("read created user")(StoreError::Operation(format!(
                "user {} vanished after creation",
                id
            )))
        })
    }

    /// Finds a user by its document id.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let doc = self
            .store
            .get(USERS_COLLECTION, user_id)
            .await
            .map_err(AppError::store("get user"))?;

        doc.map(User::try_from)
            .transpose()
            .map_err(AppError::store("decode user"))
    }
}
