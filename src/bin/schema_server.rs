use log::{error, info};
use schema_builder::{SchemaHttpServer, ServerConfig, SledSchemaStore};
use std::sync::Arc;

/// Main entry point for the schema service.
///
/// Opens the document store and serves the schema API. If the store cannot
/// be opened the process exits without listening.
///
/// # Environment Variables
///
/// * `SCHEMA_STORE_URI` - Document store connection string (required)
/// * `PORT` - Port for the HTTP server (default: 5000)
/// * `SCHEMA_BUILDER_HOST` - Interface to bind (default: 0.0.0.0)
/// * `SCHEMA_BUILDER_LOG_LEVEL` - Log level (default: INFO)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    schema_builder::logging::init().ok();

    let config = ServerConfig::from_env().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let store = SledSchemaStore::open(&config.store_uri).map_err(|e| {
        error!("Document store connection failed: {}", e);
        e
    })?;
    info!("Connected to document store");

    let server = SchemaHttpServer::new(Arc::new(store), &config.bind_address());
    server.run().await?;

    Ok(())
}
