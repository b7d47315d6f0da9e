use chrono::Utc;
use log::debug;
use std::path::PathBuf;
use uuid::Uuid;

use super::{NewSchema, SchemaRecord, SchemaStore, StoreError, StoreResult};

const SCHEMAS_TREE: &str = "schemas";

/// Where a sled store lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// `sled://<path>` or a bare filesystem path
    Path(PathBuf),
    /// `memory://`: a temporary database removed when dropped
    Temporary,
}

impl StoreLocation {
    pub fn parse(uri: &str) -> StoreResult<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(StoreError::InvalidUri("connection string is empty".into()));
        }
        if uri == "memory://" {
            return Ok(StoreLocation::Temporary);
        }
        if let Some(path) = uri.strip_prefix("sled://") {
            if path.is_empty() {
                return Err(StoreError::InvalidUri(format!("'{}' has no path", uri)));
            }
            return Ok(StoreLocation::Path(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = uri.split_once("://") {
            return Err(StoreError::InvalidUri(format!(
                "unsupported scheme '{}' (expected sled:// or memory://)",
                scheme
            )));
        }
        Ok(StoreLocation::Path(PathBuf::from(uri)))
    }
}

/// Schema records stored as JSON documents in a sled tree.
///
/// Keys are sled-generated monotonic ids, so iteration order is insertion order.
#[derive(Clone)]
pub struct SledSchemaStore {
    db: sled::Db,
    schemas: sled::Tree,
}

impl SledSchemaStore {
    /// Open the store named by a connection string.
    pub fn open(uri: &str) -> StoreResult<Self> {
        Self::open_location(&StoreLocation::parse(uri)?)
    }

    pub fn open_location(location: &StoreLocation) -> StoreResult<Self> {
        let db = match location {
            StoreLocation::Path(path) => sled::open(path)?,
            StoreLocation::Temporary => sled::Config::new().temporary(true).open()?,
        };
        Self::from_db(db)
    }

    pub fn from_db(db: sled::Db) -> StoreResult<Self> {
        let schemas = db.open_tree(SCHEMAS_TREE)?;
        Ok(Self { db, schemas })
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl SchemaStore for SledSchemaStore {
    fn insert(&self, schema: NewSchema) -> StoreResult<SchemaRecord> {
        let key = self.db.generate_id()?;
        let record = SchemaRecord::create(schema, Uuid::new_v4(), Utc::now());
        let bytes = serde_json::to_vec(&record)?;

        self.schemas.insert(key.to_be_bytes(), bytes)?;
        // Ensure the record is durably written before acknowledging it
        self.schemas.flush()?;

        debug!("Stored schema record {} under key {}", record.id, key);
        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<SchemaRecord>> {
        self.schemas
            .iter()
            .values()
            .map(|entry| -> StoreResult<SchemaRecord> {
                let bytes = entry?;
                Ok(serde_json::from_slice(&bytes)?)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};
    use tempfile::tempdir;

    fn schema(title: &str) -> NewSchema {
        NewSchema::new(title, "", Map::new())
    }

    #[test]
    fn parses_connection_strings() {
        assert_eq!(StoreLocation::parse("memory://").unwrap(), StoreLocation::Temporary);
        assert_eq!(
            StoreLocation::parse("sled:///var/lib/schemas").unwrap(),
            StoreLocation::Path(PathBuf::from("/var/lib/schemas"))
        );
        assert_eq!(
            StoreLocation::parse("data/schemas").unwrap(),
            StoreLocation::Path(PathBuf::from("data/schemas"))
        );
        assert!(matches!(
            StoreLocation::parse("mongodb://localhost/db"),
            Err(StoreError::InvalidUri(_))
        ));
        assert!(StoreLocation::parse("sled://").is_err());
        assert!(StoreLocation::parse("  ").is_err());
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let store = SledSchemaStore::open("memory://").unwrap();
        let record = store
            .insert(NewSchema::new("User", "people", json!({"name": ""}).as_object().cloned().unwrap()))
            .unwrap();
        assert_eq!(record.title, "User");
        assert_eq!(record.description, "people");
        assert_eq!(record.schema_json, json!({"name": ""}));
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_returns_records_in_insertion_order() {
        let store = SledSchemaStore::open("memory://").unwrap();
        assert!(store.list().unwrap().is_empty());

        let ids: Vec<Uuid> = (0..5)
            .map(|i| store.insert(schema(&format!("s{}", i))).unwrap().id)
            .collect();
        let listed: Vec<Uuid> = store.list().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempdir().unwrap();
        let uri = format!("sled://{}", dir.path().display());
        let id = {
            let store = SledSchemaStore::open(&uri).unwrap();
            store.insert(schema("persisted")).unwrap().id
        };

        let store = SledSchemaStore::open(&uri).unwrap();
        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].title, "persisted");
    }

    #[test]
    fn corrupt_documents_surface_as_unavailable() {
        let store = SledSchemaStore::open("memory://").unwrap();
        store.schemas.insert(1u64.to_be_bytes(), b"not json".to_vec()).unwrap();
        assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
    }
}
