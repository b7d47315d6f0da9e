use std::str::FromStr;

use super::controller::SchemaEditor;
use super::field::{FieldKind, FieldPath};
use super::{EditorError, EditorResult};

pub const HELP: &str = "\
Commands:
  add                          add a string field at the end of the form
  child <path>                 add a field inside the nested field at <path>
  del <path>                   delete the field at <path> and everything under it
  key <path> [text]            set the key of the field at <path>
  kind <path> <string|number|nested>
                               change the type of the field at <path>
  title [text]                 set the schema title
  desc [text]                  set the schema description
  show                         print the fields and the JSON preview
  list                         list the schemas saved on the server
  submit                       save the schema
  help                         show this message
  quit                         leave the editor
Paths are dot separated indices, e.g. 1.0 is the first field inside the second field.";

/// A change to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    AddField,
    AddChild(FieldPath),
    Delete(FieldPath),
    SetKey(FieldPath, String),
    SetKind(FieldPath, FieldKind),
    SetTitle(String),
    SetDescription(String),
}

impl EditAction {
    pub fn apply(self, editor: &mut SchemaEditor) -> EditorResult<()> {
        match self {
            EditAction::AddField => {
                editor.add_root_field();
            }
            EditAction::AddChild(path) => {
                editor.add_child(&path)?;
            }
            EditAction::Delete(path) => editor.delete_field(&path)?,
            EditAction::SetKey(path, key) => editor.set_key(&path, key)?,
            EditAction::SetKind(path, kind) => editor.set_kind(&path, kind)?,
            EditAction::SetTitle(title) => editor.set_title(title),
            EditAction::SetDescription(description) => editor.set_description(description),
        }
        Ok(())
    }
}

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    Edit(EditAction),
    Show,
    List,
    Submit,
    Help,
    Quit,
}

impl FromStr for EditorCommand {
    type Err = EditorError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (verb, rest) = split_word(line);

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => EditorCommand::Edit(EditAction::AddField),
            "child" => EditorCommand::Edit(EditAction::AddChild(only_path(verb, rest)?)),
            "del" | "delete" => EditorCommand::Edit(EditAction::Delete(only_path(verb, rest)?)),
            "key" => {
                let (path, text) = split_word(rest.trim_start());
                EditorCommand::Edit(EditAction::SetKey(parse_path(verb, path)?, text.to_string()))
            }
            "kind" | "type" => {
                let (path, kind) = split_word(rest.trim_start());
                let kind = kind.trim();
                if kind.is_empty() {
                    return Err(EditorError::InvalidCommand(format!("{} needs a kind", verb)));
                }
                EditorCommand::Edit(EditAction::SetKind(parse_path(verb, path)?, kind.parse()?))
            }
            "title" => EditorCommand::Edit(EditAction::SetTitle(rest.to_string())),
            "desc" | "description" => {
                EditorCommand::Edit(EditAction::SetDescription(rest.to_string()))
            }
            "show" => EditorCommand::Show,
            "list" => EditorCommand::List,
            "submit" => EditorCommand::Submit,
            "help" | "?" => EditorCommand::Help,
            "quit" | "exit" => EditorCommand::Quit,
            "" => return Err(EditorError::InvalidCommand("empty command".into())),
            other => {
                return Err(EditorError::InvalidCommand(format!(
                    "unknown command '{}', type help for a list",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Split off the first whitespace separated word; the remainder keeps inner spacing.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn parse_path(verb: &str, path: &str) -> EditorResult<FieldPath> {
    if path.is_empty() {
        return Err(EditorError::InvalidCommand(format!("{} needs a field path", verb)));
    }
    path.parse()
}

fn only_path(verb: &str, rest: &str) -> EditorResult<FieldPath> {
    let (path, extra) = split_word(rest.trim());
    if !extra.trim().is_empty() {
        return Err(EditorError::InvalidCommand(format!(
            "{} takes a single field path",
            verb
        )));
    }
    parse_path(verb, path)
}
