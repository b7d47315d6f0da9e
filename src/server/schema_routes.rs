use super::http_helpers::with_store;
use super::http_server::AppState;
use crate::store::{NewSchema, SchemaStore};
use actix_web::{http::StatusCode, web, Responder};
use log::{error, info};
use serde_json::Value;

/// List all stored schemas.
pub async fn list_schemas(state: web::Data<AppState>) -> impl Responder {
    info!("Received request to list schemas");
    with_store(state, |store| {
        let records = store.list().map_err(|e| {
            error!("Failed to list schemas: {}", e);
            e
        })?;
        Ok((StatusCode::OK, serde_json::to_value(records)?))
    })
    .await
}

/// Create a new schema from a `{title, description, schemaJson}` body.
pub async fn create_schema(payload: web::Json<Value>, state: web::Data<AppState>) -> impl Responder {
    info!("Received request to create schema");
    with_store(state, move |store| {
        let schema = NewSchema::from_payload(payload.into_inner()).map_err(|e| {
            info!("Rejected schema payload: {}", e);
            e
        })?;
        let record = store.insert(schema).map_err(|e| {
            error!("Failed to store schema: {}", e);
            e
        })?;
        info!("Created schema '{}' ({})", record.title, record.id);
        Ok((StatusCode::CREATED, serde_json::to_value(record)?))
    })
    .await
}
