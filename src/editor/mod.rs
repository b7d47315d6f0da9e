//! # Tree Editor
//!
//! Client-side state for composing a schema: an ordered forest of field nodes,
//! the recursive transform that turns it into a JSON object, a row renderer,
//! and the controller that owns the form and submits it to the schema service.
//!
//! ## Modules
//!
//! - [`field`] - Field nodes, kinds and paths
//! - [`forest`] - The ordered forest and its edit operations
//! - [`render`] - Row and text rendering of a forest
//! - [`controller`] - Form state owned by a single [`SchemaEditor`]
//! - [`command`] - Line commands for the interactive session

pub mod command;
pub mod controller;
pub mod field;
pub mod forest;
pub mod render;

pub use command::{EditAction, EditorCommand};
pub use controller::{SchemaEditor, SchemaSubmitter};
pub use field::{FieldBody, FieldKind, FieldNode, FieldPath, NodeId, ScalarKind};
pub use forest::{fields_to_json, Forest};

/// Errors raised while editing or submitting a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    /// The path does not address a node that supports the operation
    #[error("no field at path '{0}'")]
    InvalidPath(String),

    /// Submission attempted without a title
    #[error("Please enter a schema title.")]
    MissingTitle,

    /// The request to the schema service failed; the detail is only logged
    #[error("Something went wrong while saving the schema.")]
    NetworkFailure(String),

    /// Fetching the saved schemas failed; the detail is only logged
    #[error("Something went wrong while loading the saved schemas.")]
    ListFailure(String),

    /// An interactive command could not be parsed
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
