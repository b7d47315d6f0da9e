//! Common test utilities and fixtures for the schema service tests
//!
//! Provides store fixtures shared by the HTTP and end-to-end tests.

#![allow(dead_code)]

use schema_builder::store::{NewSchema, SchemaRecord, SchemaStore, StoreError, StoreResult};
use schema_builder::SledSchemaStore;
use std::sync::Arc;
use tempfile::TempDir;

/// A sled store living in a temporary directory that is removed on drop.
pub struct StoreFixture {
    pub store: Arc<SledSchemaStore>,
    pub _temp_dir: TempDir,
}

impl StoreFixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let uri = format!("sled://{}", temp_dir.path().display());
        let store = SledSchemaStore::open(&uri).expect("Failed to open sled store");
        Self {
            store: Arc::new(store),
            _temp_dir: temp_dir,
        }
    }
}

/// A store whose backend is always down.
pub struct UnavailableStore;

impl SchemaStore for UnavailableStore {
    fn insert(&self, _schema: NewSchema) -> StoreResult<SchemaRecord> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn list(&self) -> StoreResult<Vec<SchemaRecord>> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

/// Pick a free local port for a live server.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
