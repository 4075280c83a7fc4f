//! Ordered key-value document
//!
//! A JSON object whose top-level keys keep their original order across a
//! parse/serialize round trip (`serde_json` with `preserve_order`). Used to
//! set one key in a file of otherwise unknown shape without disturbing the rest.

use std::fmt;

use serde_json::{Map, Value};

/// Why a document could not be loaded for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Not valid JSON
    Syntax(String),
    /// Valid JSON, but the top level is not an object
    NotAnObject(&'static str),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Syntax(msg) => write!(f, "invalid JSON: {}", msg),
            DocumentError::NotAnObject(kind) => {
                write!(f, "expected a JSON object at top level, found {}", kind)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Top-level JSON object with stable key order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedDocument {
    entries: Map<String, Value>,
}

impl OrderedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document; anything but a top-level object is rejected.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Syntax(e.to_string()))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            Value::Array(_) => Err(DocumentError::NotAnObject("an array")),
            Value::String(_) => Err(DocumentError::NotAnObject("a string")),
            Value::Number(_) => Err(DocumentError::NotAnObject("a number")),
            Value::Bool(_) => Err(DocumentError::NotAnObject("a boolean")),
            Value::Null => Err(DocumentError::NotAnObject("null")),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Set one key. An existing key keeps its position; a new key is appended.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Two-space indented JSON with a single trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(&self.entries)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_preserves_other_keys_in_order() {
        let mut doc = OrderedDocument::parse(
            r#"{"name":"ntr","private":true,"scripts":{"dev":"turbo dev"},"workspaces":["apps/*"]}"#,
        )
        .unwrap();

        doc.set("lint-staged", json!({"*.md": ["prettier --write"]}));

        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(
            keys,
            vec!["name", "private", "scripts", "workspaces", "lint-staged"]
        );
        assert_eq!(doc.get("scripts"), Some(&json!({"dev": "turbo dev"})));
    }

    #[test]
    fn existing_key_keeps_its_position() {
        let mut doc = OrderedDocument::parse(r#"{"a":1,"lint-staged":{},"z":2}"#).unwrap();

        let previous = doc.set("lint-staged", json!({"*.ts": ["eslint --fix"]}));

        assert_eq!(previous, Some(json!({})));
        let keys: Vec<_> = doc.keys().collect();
        assert_eq!(keys, vec!["a", "lint-staged", "z"]);
    }

    #[test]
    fn keys_are_not_sorted_on_output() {
        let doc = OrderedDocument::parse(r#"{"zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(
            doc.to_pretty_string().unwrap(),
            "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}\n"
        );
    }

    #[test]
    fn output_ends_with_exactly_one_newline() {
        let doc = OrderedDocument::parse("{\"a\": 1}\n\n").unwrap();
        let out = doc.to_pretty_string().unwrap();
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = OrderedDocument::parse("{\"name\": ").unwrap_err();
        assert!(matches!(err, DocumentError::Syntax(_)));
    }

    #[test]
    fn rejects_non_object_top_level() {
        assert_eq!(
            OrderedDocument::parse("[1, 2]").unwrap_err(),
            DocumentError::NotAnObject("an array")
        );
        assert_eq!(
            OrderedDocument::parse("null").unwrap_err(),
            DocumentError::NotAnObject("null")
        );
    }

    #[test]
    fn empty_document() {
        let mut doc = OrderedDocument::new();
        assert!(doc.is_empty());
        doc.set("k", json!("v"));
        assert_eq!(doc.len(), 1);
    }
}
