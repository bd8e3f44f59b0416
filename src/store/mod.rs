//! Document store abstraction.
//!
//! Handlers never talk to a database directly: they go through the
//! [`DocumentStore`] trait, which exposes exactly the three operations the
//! API needs (add, get, ordered query) over named collections.
//!
//! - `value` - Typed field values and their ordering
//! - `document` - Stored documents and typed field accessors
//! - `traits` - The `DocumentStore` trait and query description
//! - `memory` - Process-local implementation backed by `DashMap`

mod document;
mod error;
mod memory;
mod traits;
mod value;

pub use document::{Document, DocumentId, Fields};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{Direction, DocumentStore, Query};
pub use value::Value;
