use async_trait::async_trait;
use converter_formatter::error::{StoreError, StoreResult};
use converter_formatter::store::{Document, DocumentStore, FieldEquals};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock document store for testing.
///
/// Provides an in-memory implementation of DocumentStore that can be easily
/// seeded with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<usize>>,
    fail_next: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockDocumentStore {
    /// Create a new empty MockDocumentStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly into a collection, returning its id.
    pub fn seed(&self, collection: &str, data: Map<String, Value>) -> String {
        let id = self.allocate_id();
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                data,
            });
        id
    }

    /// All documents currently held in a collection.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        let collections = self.collections.lock().unwrap();
        collections.get(collection).cloned().unwrap_or_default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Make the next store operation fail with a backend error.
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_string());
    }

    fn allocate_id(&self) -> String {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        format!("doc-{}", *next_id)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn take_failure(&self) -> Option<StoreError> {
        self.fail_next
            .lock()
            .unwrap()
            .take()
            .map(StoreError::Backend)
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn save(&self, collection: &str, data: Map<String, Value>) -> StoreResult<String> {
        self.track_call("save");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.seed(collection, data))
    }

    async fn query(
        &self,
        collection: &str,
        filters: &[FieldEquals],
    ) -> StoreResult<Vec<Document>> {
        self.track_call("query");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let collections = self.collections.lock().unwrap();
        let documents = collections.get(collection).cloned().unwrap_or_default();
        Ok(documents
            .into_iter()
            .filter(|doc| {
                filters
                    .iter()
                    .all(|f| doc.data.get(&f.field) == Some(&f.value))
            })
            .collect())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        data: Map<String, Value>,
    ) -> StoreResult<()> {
        self.track_call("update");
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let mut collections = self.collections.lock().unwrap();
        let documents = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let document = documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        document.data = data;
        Ok(())
    }
}
