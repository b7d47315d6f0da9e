//! # Schema Builder
//!
//! Compose nested field schemas and persist them through a small REST service.
//!
//! ## Core Components
//!
//! * `editor` - The field tree, its JSON transform, rendering and the form controller
//! * `client` - HTTP client the editor uses to reach the service
//! * `server` - actix-web service exposing create/list endpoints
//! * `store` - Schema record documents and the sled-backed store
//! * `logging` - Logger setup
//! * `error` - Crate-level error type
//!
//! ## Generating JSON
//!
//! ```
//! use schema_builder::editor::{FieldNode, Forest, ScalarKind};
//! use serde_json::json;
//!
//! let forest = Forest::from(vec![
//!     FieldNode::scalar("a", ScalarKind::String),
//!     FieldNode::nested("b", vec![FieldNode::scalar("c", ScalarKind::Number)]),
//! ]);
//! assert_eq!(forest.to_json(), json!({"a": "", "b": {"c": 0}}));
//! ```

pub mod client;
pub mod editor;
pub mod error;
pub mod logging;
pub mod server;
pub mod store;

pub use client::SchemaApiClient;
pub use editor::{EditorError, SchemaEditor};
pub use error::{SchemaBuilderError, SchemaBuilderResult};
pub use server::{SchemaHttpServer, ServerConfig};
pub use store::{NewSchema, SchemaRecord, SchemaStore, SledSchemaStore, StoreError};
