use async_trait::async_trait;
use log::{error, info};
use serde_json::Value;

use super::field::{FieldKind, FieldPath, NodeId};
use super::forest::{fields_to_json, Forest};
use super::{EditorError, EditorResult};
use crate::store::{NewSchema, SchemaRecord};

/// Sends a finished schema to wherever it is persisted.
#[async_trait]
pub trait SchemaSubmitter: Send + Sync {
    async fn create_schema(&self, schema: &NewSchema) -> EditorResult<SchemaRecord>;
}

/// The schema form: title, description and the field forest.
///
/// All edit operations go through this controller, and renderers receive
/// the forest by reference from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEditor {
    title: String,
    description: String,
    forest: Forest,
}

impl Default for SchemaEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEditor {
    /// An empty form with one default field.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            forest: Forest::with_default_field(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn add_root_field(&mut self) -> NodeId {
        self.forest.add_root_field()
    }

    pub fn add_child(&mut self, path: &FieldPath) -> EditorResult<NodeId> {
        self.forest.add_child(path)
    }

    pub fn delete_field(&mut self, path: &FieldPath) -> EditorResult<()> {
        self.forest.delete_field(path).map(|_| ())
    }

    pub fn set_kind(&mut self, path: &FieldPath, kind: FieldKind) -> EditorResult<()> {
        self.forest.set_kind(path, kind)
    }

    pub fn set_key(&mut self, path: &FieldPath, key: impl Into<String>) -> EditorResult<()> {
        self.forest.set_key(path, key)
    }

    /// JSON generated from the current forest.
    pub fn preview(&self) -> Value {
        self.forest.to_json()
    }

    /// The preview pane contents, indented by two spaces per level.
    pub fn preview_pretty(&self) -> String {
        format!("{:#}", self.preview())
    }

    /// Build the payload to submit, refusing a blank title.
    pub fn submission(&self) -> EditorResult<NewSchema> {
        if self.title.trim().is_empty() {
            return Err(EditorError::MissingTitle);
        }
        Ok(NewSchema::new(
            self.title.clone(),
            self.description.clone(),
            fields_to_json(self.forest.roots()),
        ))
    }

    /// Submit the form.
    ///
    /// On success the form is reset and the stored record returned. On any
    /// failure the form keeps its contents.
    pub async fn submit<S>(&mut self, submitter: &S) -> EditorResult<SchemaRecord>
    where
        S: SchemaSubmitter + ?Sized,
    {
        let schema = self.submission()?;
        match submitter.create_schema(&schema).await {
            Ok(record) => {
                info!("Schema '{}' saved as {}", record.title, record.id);
                self.reset();
                Ok(record)
            }
            Err(e) => {
                if let EditorError::NetworkFailure(detail) = &e {
                    error!("Error submitting schema: {}", detail);
                }
                Err(e)
            }
        }
    }

    /// Return to the initial state: empty title and description, one default field.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
