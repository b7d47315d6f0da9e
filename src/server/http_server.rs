use super::schema_routes;
use crate::error::{SchemaBuilderError, SchemaBuilderResult};
use crate::store::SchemaStore;

use actix_cors::Cors;
use actix_web::{
    error::InternalError, middleware::Logger, web, App, HttpResponse, HttpServer as ActixHttpServer,
};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

/// HTTP server for the schema service.
///
/// Serves the two schema endpoints over a shared [`SchemaStore`]. Each
/// request runs independently against the store; the server keeps no
/// per-request state.
pub struct SchemaHttpServer {
    /// The document store backing every request
    store: Arc<dyn SchemaStore>,
    /// The HTTP server bind address
    bind_address: String,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    pub store: Arc<dyn SchemaStore>,
}

impl SchemaHttpServer {
    /// Create a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `store` - The store records are written to and listed from
    /// * `bind_address` - The address to bind to (e.g., "0.0.0.0:5000")
    pub fn new(store: Arc<dyn SchemaStore>, bind_address: &str) -> Self {
        Self {
            store,
            bind_address: bind_address.to_string(),
        }
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Run the HTTP server until it is stopped.
    ///
    /// # Errors
    ///
    /// Returns a `SchemaBuilderError` if:
    /// * There is an error binding to the specified address
    /// * The server stops with an I/O error
    pub async fn run(&self) -> SchemaBuilderResult<()> {
        let app_state = web::Data::new(AppState {
            store: self.store.clone(),
        });

        let server = ActixHttpServer::new(move || {
            App::new()
                .wrap(cors())
                .wrap(Logger::default())
                .app_data(app_state.clone())
                .configure(configure_api)
        })
        .bind(&self.bind_address)
        .map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}", self.bind_address, e);
            SchemaBuilderError::Io(e)
        })?
        .run();

        info!("Server running on {}", self.bind_address);

        server.await.map_err(|e| {
            error!("HTTP server error: {}", e);
            SchemaBuilderError::Io(e)
        })?;

        Ok(())
    }
}

/// CORS policy: every origin, method and header is allowed.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Register the `/api` routes and the JSON body settings.
///
/// Bodies that are not valid JSON are answered with `400 {"error": ...}`,
/// the same shape as store rejections.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/schemas", web::get().to(schema_routes::list_schemas))
            .route("/schemas/add", web::post().to(schema_routes::create_schema)),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(json!({"error": err.to_string()}));
        InternalError::from_response(err, response).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SledSchemaStore;

    #[actix_web::test]
    async fn bind_failure_is_an_io_error() {
        let store = SledSchemaStore::open("memory://").unwrap();
        let server = SchemaHttpServer::new(Arc::new(store), "not-an-address");
        let err = server.run().await.unwrap_err();
        assert!(matches!(err, SchemaBuilderError::Io(_)));
    }
}
