//! HTTP client for the schema service, used by the editor to submit and list.

use async_trait::async_trait;
use log::{debug, error};

use crate::editor::{EditorError, EditorResult, SchemaSubmitter};
use crate::store::{NewSchema, SchemaRecord};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct SchemaApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for SchemaApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl SchemaApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch every stored schema.
    pub async fn list_schemas(&self) -> EditorResult<Vec<SchemaRecord>> {
        let url = self.endpoint("/api/schemas");
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await.map_err(list_failure)?;
        if !response.status().is_success() {
            let detail = format!("Failed to list schemas: {}", response.status());
            error!("{}", detail);
            return Err(EditorError::ListFailure(detail));
        }
        response.json().await.map_err(list_failure)
    }
}

#[async_trait]
impl SchemaSubmitter for SchemaApiClient {
    async fn create_schema(&self, schema: &NewSchema) -> EditorResult<SchemaRecord> {
        let url = self.endpoint("/api/schemas/add");
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .json(schema)
            .send()
            .await
            .map_err(network_failure)?;
        if !response.status().is_success() {
            return Err(EditorError::NetworkFailure(format!(
                "Failed to save schema: {}",
                response.status()
            )));
        }
        response.json().await.map_err(network_failure)
    }
}

fn network_failure(error: reqwest::Error) -> EditorError {
    EditorError::NetworkFailure(error.to_string())
}

fn list_failure(e: reqwest::Error) -> EditorError {
    error!("Failed to list schemas: {}", e);
    EditorError::ListFailure(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = SchemaApiClient::new("http://example.test:5000/");
        assert_eq!(client.base_url(), "http://example.test:5000");
        assert_eq!(
            client.endpoint("/api/schemas/add"),
            "http://example.test:5000/api/schemas/add"
        );
    }

    #[test]
    fn defaults_to_local_service() {
        assert_eq!(SchemaApiClient::default().base_url(), DEFAULT_SERVER_URL);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_failure() {
        // Port 9 (discard) is not expected to run an HTTP service
        let client = SchemaApiClient::new("http://127.0.0.1:9");
        let err = client
            .create_schema(&NewSchema::new("t", "", Default::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::NetworkFailure(_)));
    }

    #[tokio::test]
    async fn unreachable_server_fails_listing_with_its_own_alert() {
        let client = SchemaApiClient::new("http://127.0.0.1:9");
        let err = client.list_schemas().await.unwrap_err();
        assert!(matches!(err, EditorError::ListFailure(_)));
        assert_eq!(
            err.to_string(),
            "Something went wrong while loading the saved schemas."
        );
    }
}
