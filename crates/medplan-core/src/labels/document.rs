//! Structured label documents.
//!
//! Registry labels arrive as XML and are converted to a loose tree. Only the
//! text content matters to hint extraction, so the tree keeps element order
//! but no schema.

use std::fmt;

use serde_json::{Number, Value};

/// A leaf value in a label document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    /// Kept as parsed so it renders with its source precision (`1.0` stays `1.0`)
    Number(Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Arbitrarily nested label tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LabelDocument {
    /// Keyed children in document order
    Map(Vec<(String, LabelDocument)>),
    Sequence(Vec<LabelDocument>),
    Scalar(Scalar),
    #[default]
    Absent,
}

impl LabelDocument {
    pub fn text(s: impl Into<String>) -> Self {
        LabelDocument::Scalar(Scalar::Text(s.into()))
    }

    /// Look up a direct child of a map by key.
    pub fn get(&self, key: &str) -> Option<&LabelDocument> {
        match self {
            LabelDocument::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Concatenate every leaf into one space-separated string.
    ///
    /// Children are joined by a single space, so absent leaves still leave
    /// their separator behind. Keys are not included.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            LabelDocument::Map(entries) => {
                join_into(entries.iter().map(|(_, v)| v), out);
            }
            LabelDocument::Sequence(items) => join_into(items.iter(), out),
            LabelDocument::Scalar(scalar) => out.push_str(&scalar.to_string()),
            LabelDocument::Absent => {}
        }
    }
}

fn join_into<'a>(children: impl Iterator<Item = &'a LabelDocument>, out: &mut String) {
    for (i, child) in children.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        child.flatten_into(out);
    }
}

impl From<Value> for LabelDocument {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => LabelDocument::Absent,
            Value::Bool(b) => LabelDocument::Scalar(Scalar::Bool(b)),
            Value::Number(n) => LabelDocument::Scalar(Scalar::Number(n)),
            Value::String(s) => LabelDocument::Scalar(Scalar::Text(s)),
            Value::Array(items) => {
                LabelDocument::Sequence(items.into_iter().map(LabelDocument::from).collect())
            }
            Value::Object(map) => LabelDocument::Map(
                map.into_iter()
                    .map(|(k, v)| (k, LabelDocument::from(v)))
                    .collect(),
            ),
        }
    }
}
