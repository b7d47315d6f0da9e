//! # Schema Service
//!
//! HTTP surface for creating and listing schema records:
//!
//! * `POST /api/schemas/add` - store a `{title, description, schemaJson}` document
//! * `GET /api/schemas` - list every stored document
//!
//! Cross-origin requests are accepted from anywhere.

pub mod config;
pub mod http_helpers;
pub mod http_server;
pub mod schema_routes;

pub use config::ServerConfig;
pub use http_server::{configure_api, cors, AppState, SchemaHttpServer};
