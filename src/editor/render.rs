//! Flatten a forest into display rows.
//!
//! Every field gets one row; a nested field is followed by its children and
//! then by an "add child" row for that field. Rows also carry warnings for
//! keys that generation will skip (empty) or overwrite (duplicate).

use colored::Colorize;
use std::collections::HashMap;
use std::fmt::Write as _;

use super::field::{FieldKind, FieldNode, FieldPath, NodeId};
use super::forest::Forest;

/// One editable field row.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub id: NodeId,
    pub path: FieldPath,
    pub depth: usize,
    pub key: String,
    pub kind: FieldKind,
    /// The key is empty and the field will not appear in generated JSON
    pub empty_key: bool,
    /// A later sibling reuses this key and will overwrite it
    pub shadowed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Field(FieldRow),
    /// Control for appending a child to the nested field at `parent`
    AddChild { parent: FieldPath, depth: usize },
}

pub fn render_forest(forest: &Forest) -> Vec<Row> {
    let mut rows = Vec::new();
    render_level(forest.roots(), &FieldPath::default(), 0, &mut rows);
    rows
}

fn render_level(fields: &[FieldNode], parent: &FieldPath, depth: usize, rows: &mut Vec<Row>) {
    let mut last_index: HashMap<&str, usize> = HashMap::new();
    for (index, field) in fields.iter().enumerate() {
        last_index.insert(field.key.as_str(), index);
    }

    for (index, field) in fields.iter().enumerate() {
        let path = parent.child(index);
        rows.push(Row::Field(FieldRow {
            id: field.id(),
            path: path.clone(),
            depth,
            key: field.key.clone(),
            kind: field.kind(),
            empty_key: field.key.is_empty(),
            shadowed: !field.key.is_empty() && last_index.get(field.key.as_str()) != Some(&index),
        }));
        if field.kind() == FieldKind::Nested {
            render_level(field.children(), &path, depth + 1, rows);
            rows.push(Row::AddChild {
                parent: path,
                depth: depth + 1,
            });
        }
    }
}

/// Plain-text rendering of the rows, two spaces of indent per level.
pub fn render_text(forest: &Forest) -> String {
    format_rows(forest, false)
}

/// The same layout as [`render_text`] with terminal colors applied.
pub fn render_colored(forest: &Forest) -> String {
    format_rows(forest, true)
}

#[derive(Clone, Copy)]
enum Tone {
    Kind,
    Muted,
    Warning,
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Kind => text.green().to_string(),
        Tone::Muted => text.dimmed().to_string(),
        Tone::Warning => text.yellow().to_string(),
    }
}

fn format_rows(forest: &Forest, color: bool) -> String {
    let mut out = String::new();
    for row in render_forest(forest) {
        match row {
            Row::Field(field) => {
                let key = if field.empty_key {
                    paint("<empty>", Tone::Muted, color)
                } else {
                    field.key.clone()
                };
                let _ = write!(
                    out,
                    "{:indent$}[{}] {} : {}",
                    "",
                    field.path,
                    key,
                    paint(&field.kind.to_string(), Tone::Kind, color),
                    indent = field.depth * 2
                );
                if field.empty_key {
                    out.push_str(&paint("  (skipped)", Tone::Muted, color));
                } else if field.shadowed {
                    out.push_str(&paint("  (overwritten by a later field)", Tone::Warning, color));
                }
                out.push('\n');
            }
            Row::AddChild { parent, depth } => {
                let control = format!("+ add field to [{}]", parent);
                let _ = writeln!(
                    out,
                    "{:indent$}{}",
                    "",
                    paint(&control, Tone::Muted, color),
                    indent = depth * 2
                );
            }
        }
    }
    out
}
