use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::{json, Value};

use super::http_server::AppState;
use crate::store::{SchemaStore, StoreError, StoreResult};

/// Run a closure against the store and turn its outcome into a JSON response.
///
/// Errors become `{"error": message}` with the status from [`error_status`].
pub async fn with_store<F>(state: web::Data<AppState>, func: F) -> HttpResponse
where
    F: FnOnce(&dyn SchemaStore) -> StoreResult<(StatusCode, Value)>,
{
    match func(state.store.as_ref()) {
        Ok((status, value)) => HttpResponse::build(status).json(value),
        Err(e) => error_response(&e),
    }
}

/// Shape rejections are the caller's fault; everything else is the server's.
pub fn error_status(error: &StoreError) -> StatusCode {
    match error {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::Unavailable(_) | StoreError::InvalidUri(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: &StoreError) -> HttpResponse {
    HttpResponse::build(error_status(error)).json(json!({"error": error.to_string()}))
}
