//! Application state for Axum web framework.
//!
//! Contains the shared resources accessible across all request handlers.

use std::sync::Arc;

use crate::repositories::Repositories;
use crate::store::DocumentStore;

/// Application state containing all shared resources.
///
/// Cloning is cheap: everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Typed access to users and quizzes
    pub repositories: Repositories,
    /// Raw store handle, initialized once at process start
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Creates the state from a store handle.
    ///
    /// # Example
    /// ```ignore
    /// let state = AppState::new(Arc::new(MemoryStore::new()));
    /// ```
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repositories: Repositories::new(store.clone()),
            store,
        }
    }
}
