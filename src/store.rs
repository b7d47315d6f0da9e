//! Persistence for schema records.
//!
//! The service talks to a [`SchemaStore`]; the shipped implementation keeps
//! records as JSON documents in a sled tree.

pub mod document;
pub mod sled_store;

pub use document::{NewSchema, SchemaRecord};
pub use sled_store::{SledSchemaStore, StoreLocation};

/// Errors raised by a schema store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The payload does not have a shape the store accepts
    #[error("schema validation failed: {0}")]
    Validation(String),

    /// The store could not be reached or failed while reading/writing
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The connection string could not be understood
    #[error("invalid store connection string: {0}")]
    InvalidUri(String),
}

impl From<sled::Error> for StoreError {
    fn from(error: sled::Error) -> Self {
        StoreError::Unavailable(error.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::Unavailable(format!("corrupt record encoding: {}", error))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A document collection of schema records.
///
/// Implementations assign the record id and timestamps on insert. Listing
/// returns records in whatever order the backend naturally yields them.
pub trait SchemaStore: Send + Sync {
    fn insert(&self, schema: NewSchema) -> StoreResult<SchemaRecord>;

    fn list(&self) -> StoreResult<Vec<SchemaRecord>>;
}
