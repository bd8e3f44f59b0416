//! In-memory document store backed by `DashMap`.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use dashmap::DashMap;
use rand::distr::Alphanumeric;
use rand::Rng;

use super::{Direction, Document, DocumentId, DocumentStore, Fields, Query, StoreResult};

/// Length of generated document identifiers.
pub const AUTO_ID_LEN: usize = 20;

/// Process-local document store.
///
/// Each collection is a map guarded by its own `DashMap` shard lock, so a
/// single add or get is atomic with respect to other requests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, HashMap<DocumentId, Fields>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

fn generate_id() -> DocumentId {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(AUTO_ID_LEN)
        .map(char::from)
        .collect()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId> {
        let mut docs = self.collections.entry(collection.to_string()).or_default();

        let mut id = generate_id();
        while docs.contains_key(&id) {
            id = generate_id();
        }
        docs.insert(id.clone(), fields);

        tracing::trace!(collection, id = %id, "Document added");
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let document = self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).map(|fields| Document::new(id, fields.clone())));
        Ok(document)
    }

    async fn query(&self, collection: &str, query: Query) -> StoreResult<Vec<Document>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut results: Vec<Document> = docs
            .iter()
            .filter(|(_, fields)| match &query.order_by {
                Some(field) => fields.contains_key(field),
                None => true,
            })
            .map(|(id, fields)| Document::new(id.as_str(), fields.clone()))
            .collect();
        drop(docs);

        results.sort_by(|a, b| compare_documents(a, b, &query));

        if let Some(limit) = query.limit {
            results.truncate(limit);
        }
        Ok(results)
    }
}

fn compare_documents(a: &Document, b: &Document, query: &Query) -> Ordering {
    let by_field = match &query.order_by {
        Some(field) => {
            let ordering = a.get(field).cmp(&b.get(field));
            match query.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        }
        None => Ordering::Equal,
    };
    by_field.then_with(|| a.id.cmp(&b.id))
}
