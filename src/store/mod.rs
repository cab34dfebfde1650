//! Document store abstraction.
//!
//! The remote store is an external collaborator with plain put/query/update
//! semantics. This crate defines only the seam; retry, caching and
//! consistency belong to the store implementation, not here.

pub mod traits;

pub use traits::{Document, DocumentStore, FieldEquals};
