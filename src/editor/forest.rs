use serde_json::{Map, Value};

use super::field::{FieldBody, FieldKind, FieldNode, FieldPath, NodeId};
use super::{EditorError, EditorResult};

/// Ordered sequence of root fields.
///
/// Insertion order is display order and generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<FieldNode>,
}

impl From<Vec<FieldNode>> for Forest {
    fn from(roots: Vec<FieldNode>) -> Self {
        Self { roots }
    }
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// A forest holding a single default field, the state a fresh form starts in.
    pub fn with_default_field() -> Self {
        Self {
            roots: vec![FieldNode::new()],
        }
    }

    pub fn roots(&self) -> &[FieldNode] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn get(&self, path: &FieldPath) -> Option<&FieldNode> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    /// Append a default string field to the end of the root forest.
    pub fn add_root_field(&mut self) -> NodeId {
        let field = FieldNode::new();
        let id = field.id();
        self.roots.push(field);
        id
    }

    /// Append a default field to the children of the nested field at `path`.
    pub fn add_child(&mut self, path: &FieldPath) -> EditorResult<NodeId> {
        let children = self
            .node_mut(path)?
            .children_mut()
            .ok_or_else(|| EditorError::InvalidPath(path.to_string()))?;
        let field = FieldNode::new();
        let id = field.id();
        children.push(field);
        Ok(id)
    }

    /// Remove the field at `path` together with its subtree.
    pub fn delete_field(&mut self, path: &FieldPath) -> EditorResult<FieldNode> {
        let (index, parent) = path
            .split_last()
            .ok_or_else(|| EditorError::InvalidPath(path.to_string()))?;
        let siblings = self
            .siblings_mut(parent)
            .filter(|siblings| index < siblings.len())
            .ok_or_else(|| EditorError::InvalidPath(path.to_string()))?;
        Ok(siblings.remove(index))
    }

    pub fn set_kind(&mut self, path: &FieldPath, kind: FieldKind) -> EditorResult<()> {
        self.node_mut(path)?.set_kind(kind);
        Ok(())
    }

    /// Replace the key of the field at `path`. Any string is accepted, including empty.
    pub fn set_key(&mut self, path: &FieldPath, key: impl Into<String>) -> EditorResult<()> {
        self.node_mut(path)?.key = key.into();
        Ok(())
    }

    /// Generate the JSON object described by this forest.
    pub fn to_json(&self) -> Value {
        Value::Object(fields_to_json(&self.roots))
    }

    fn node_mut(&mut self, path: &FieldPath) -> EditorResult<&mut FieldNode> {
        let (index, parent) = path
            .split_last()
            .ok_or_else(|| EditorError::InvalidPath(path.to_string()))?;
        self.siblings_mut(parent)
            .and_then(|siblings| siblings.get_mut(index))
            .ok_or_else(|| EditorError::InvalidPath(path.to_string()))
    }

    /// The children list addressed by `parent`; the root list when `parent` is empty.
    fn siblings_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<FieldNode>> {
        let mut siblings = &mut self.roots;
        for &index in parent {
            siblings = siblings.get_mut(index)?.children_mut()?;
        }
        Some(siblings)
    }
}

/// Turn a list of fields into a JSON object.
///
/// Fields with an empty key are skipped. Strings become `""`, numbers `0`,
/// nested fields recurse. A repeated key overwrites the earlier value.
pub fn fields_to_json(fields: &[FieldNode]) -> Map<String, Value> {
    let mut object = Map::new();
    for field in fields {
        if field.key.is_empty() {
            continue;
        }
        let value = match field.body() {
            FieldBody::Scalar(kind) => kind.placeholder(),
            FieldBody::Nested(children) => Value::Object(fields_to_json(children)),
        };
        object.insert(field.key.clone(), value);
    }
    object
}
