use crate::error::StoreResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored document: its store-assigned id plus its field data.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

/// An equality predicate on a document field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEquals {
    pub field: String,
    pub value: Value,
}

impl FieldEquals {
    /// Build an equality predicate for the given field.
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Abstraction over the remote document store.
///
/// Enables different implementations (managed document database, in-memory
/// mock) behind the same seam. Collection names are passed in already
/// suffixed for the environment.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a new document, returning its store-assigned id.
    async fn save(&self, collection: &str, data: Map<String, Value>) -> StoreResult<String>;

    /// Return every document in the collection matching all predicates.
    async fn query(&self, collection: &str, filters: &[FieldEquals])
        -> StoreResult<Vec<Document>>;

    /// Replace the fields of an existing document.
    async fn update(&self, collection: &str, id: &str, data: Map<String, Value>)
        -> StoreResult<()>;
}
