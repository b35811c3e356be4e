// enricher-core/src/domain/project/document.rs

use serde_json::{Map, Value};
use std::fmt;

use crate::domain::error::DomainError;

pub(crate) const NODES: &str = "nodes";
pub(crate) const COLUMNS: &str = "columns";

/// Which dbt artifact a document came from. Used to label shape errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Manifest,
    Catalog,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Manifest => f.write_str("manifest"),
            DocumentKind::Catalog => f.write_str("catalog"),
        }
    }
}

/// Human name of a JSON value type, for error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The dbt `manifest.json`.
///
/// Only the shape of `nodes` is checked. Node records and every other
/// top-level field (`metadata`, `sources`, `macros`...) are opaque and kept
/// in their original key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let root = into_object(value, DocumentKind::Manifest)?;
        if let Some(other) = root.get(NODES).filter(|nodes| !nodes.is_object()) {
            return Err(DomainError::NodesNotAnObject {
                document: DocumentKind::Manifest,
                found: json_type(other),
            });
        }
        Ok(Self { root })
    }

    pub(crate) fn from_root(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Nodes in document order. A manifest without `nodes` has none.
    pub fn nodes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.root
            .get(NODES)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|nodes| nodes.iter())
    }

    pub fn node(&self, node_id: &str) -> Option<&Value> {
        self.root
            .get(NODES)
            .and_then(Value::as_object)
            .and_then(|nodes| nodes.get(node_id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }
}

/// The dbt `catalog.json`. Only its `nodes` mapping is retained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    nodes: Map<String, Value>,
}

impl Catalog {
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        let mut root = into_object(value, DocumentKind::Catalog)?;
        let nodes = match root.remove(NODES) {
            None => Map::new(),
            Some(Value::Object(nodes)) => nodes,
            Some(other) => {
                return Err(DomainError::NodesNotAnObject {
                    document: DocumentKind::Catalog,
                    found: json_type(&other),
                });
            }
        };
        Ok(Self { nodes })
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `columns` value recorded for `node_id`.
    ///
    /// `None` when the catalog has no such node. A node without `columns`
    /// yields an empty object. Any other value is returned verbatim.
    pub fn columns_for(&self, node_id: &str) -> Result<Option<Value>, DomainError> {
        let Some(entry) = self.nodes.get(node_id) else {
            return Ok(None);
        };
        let Value::Object(fields) = entry else {
            return Err(DomainError::NodeNotAnObject {
                document: DocumentKind::Catalog,
                node_id: node_id.to_string(),
                found: json_type(entry),
            });
        };
        Ok(Some(
            fields
                .get(COLUMNS)
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
        ))
    }
}

fn into_object(value: Value, document: DocumentKind) -> Result<Map<String, Value>, DomainError> {
    match value {
        Value::Object(root) => Ok(root),
        other => Err(DomainError::NotAnObject {
            document,
            found: json_type(&other),
        }),
    }
}
