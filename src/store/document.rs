use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{StoreError, StoreResult};

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// A schema as submitted for creation: `{title, description, schemaJson}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchema {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_object")]
    pub schema_json: Value,
}

impl NewSchema {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        schema_json: Map<String, Value>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            schema_json: Value::Object(schema_json),
        }
    }

    /// Map an arbitrary request body onto the document shape.
    ///
    /// Unknown members are dropped. `title` and `description` accept strings
    /// and cast numbers or booleans; `schemaJson` is kept as sent, whatever its
    /// type. Missing or `null` members take their defaults.
    pub fn from_payload(payload: Value) -> StoreResult<Self> {
        let mut body = match payload {
            Value::Object(body) => body,
            other => {
                return Err(StoreError::Validation(format!(
                    "request body must be an object, got {}",
                    type_name(&other)
                )))
            }
        };

        let title = cast_string("title", body.remove("title"))?;
        let description = cast_string("description", body.remove("description"))?;
        let schema_json = match body.remove("schemaJson") {
            None | Some(Value::Null) => empty_object(),
            Some(value) => value,
        };

        Ok(Self {
            title,
            description,
            schema_json,
        })
    }
}

fn cast_string(path: &str, value: Option<Value>) -> StoreResult<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(StoreError::Validation(format!(
            "{}: cannot cast {} to string",
            path,
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A stored schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRecord {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub schema_json: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SchemaRecord {
    /// Stamp a new schema with its id and write time.
    pub fn create(schema: NewSchema, id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: schema.title,
            description: schema.description,
            schema_json: schema.schema_json,
            created_at: now,
            updated_at: now,
        }
    }
}
