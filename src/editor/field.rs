use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::EditorError;

/// Session-scoped identifier used to tell rows apart while the forest changes.
///
/// Never persisted and never part of generated JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three choices offered by a row's kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Number,
    Nested,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Nested => "nested",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "scalar-string" => Ok(FieldKind::String),
            "number" | "scalar-number" => Ok(FieldKind::Number),
            "nested" => Ok(FieldKind::Nested),
            other => Err(EditorError::InvalidCommand(format!(
                "unknown field kind '{}' (expected string, number or nested)",
                other
            ))),
        }
    }
}

/// Scalar field kinds and the placeholder each one generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
}

impl ScalarKind {
    /// The fixed value a scalar of this kind contributes to generated JSON.
    pub fn placeholder(&self) -> Value {
        match self {
            ScalarKind::String => Value::String(String::new()),
            ScalarKind::Number => json!(0),
        }
    }
}

/// What a field holds: a scalar placeholder or an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldBody {
    Scalar(ScalarKind),
    Nested(Vec<FieldNode>),
}

/// One row of the authored schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    id: NodeId,
    pub key: String,
    body: FieldBody,
}

impl Default for FieldNode {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldNode {
    /// A fresh string field with an empty key.
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            key: String::new(),
            body: FieldBody::Scalar(ScalarKind::String),
        }
    }

    pub fn scalar(key: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            id: NodeId::new(),
            key: key.into(),
            body: FieldBody::Scalar(kind),
        }
    }

    pub fn nested(key: impl Into<String>, children: Vec<FieldNode>) -> Self {
        Self {
            id: NodeId::new(),
            key: key.into(),
            body: FieldBody::Nested(children),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn body(&self) -> &FieldBody {
        &self.body
    }

    pub fn kind(&self) -> FieldKind {
        match self.body {
            FieldBody::Scalar(ScalarKind::String) => FieldKind::String,
            FieldBody::Scalar(ScalarKind::Number) => FieldKind::Number,
            FieldBody::Nested(_) => FieldKind::Nested,
        }
    }

    /// Children in display order; always empty for scalars.
    pub fn children(&self) -> &[FieldNode] {
        match &self.body {
            FieldBody::Nested(children) => children,
            FieldBody::Scalar(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<FieldNode>> {
        match &mut self.body {
            FieldBody::Nested(children) => Some(children),
            FieldBody::Scalar(_) => None,
        }
    }

    /// Change the kind selector.
    ///
    /// Leaving `nested` drops the subtree. Entering `nested` (or re-selecting
    /// it on a nested field that has no children left) seeds one empty child.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.body = match (kind, std::mem::replace(&mut self.body, FieldBody::Nested(Vec::new()))) {
            (FieldKind::String, _) => FieldBody::Scalar(ScalarKind::String),
            (FieldKind::Number, _) => FieldBody::Scalar(ScalarKind::Number),
            (FieldKind::Nested, FieldBody::Nested(children)) if !children.is_empty() => {
                FieldBody::Nested(children)
            }
            (FieldKind::Nested, _) => FieldBody::Nested(vec![FieldNode::new()]),
        };
    }
}

/// Index path from the root of a forest to a node.
///
/// The textual form is dot separated: `"1.0.2"` is the third child of the
/// first child of the second root field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of the `index`-th child of the node at this path.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split into the node's own index and its parent's indices.
    pub fn split_last(&self) -> Option<(usize, &[usize])> {
        self.0.split_last().map(|(last, parent)| (*last, parent))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EditorError::InvalidPath(s.to_string()));
        }
        s.split('.')
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|_| EditorError::InvalidPath(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(FieldPath)
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}
