//! DocumentStore trait definition.

use async_trait::async_trait;

use super::{Document, DocumentId, Fields, StoreResult};

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Ordered, limited query over a single collection.
///
/// Documents that lack the `order_by` field are not returned. Documents with
/// equal sort values are ordered by id ascending regardless of `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub order_by: Option<String>,
    pub direction: Direction,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some(field.into());
        self.direction = direction;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Trait for document store operations.
///
/// Every backend must assign identifiers itself, exactly once, unique within
/// the collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds a document to `collection` and returns its new identifier.
    async fn add(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId>;

    /// Fetches a document by identifier. `None` when it does not exist.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Runs an ordered query over `collection`.
    async fn query(&self, collection: &str, query: Query) -> StoreResult<Vec<Document>>;
}
