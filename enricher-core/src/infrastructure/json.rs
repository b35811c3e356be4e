// enricher-core/src/infrastructure/json.rs

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

use crate::error::EnricherError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{atomic_write, ensure_parent_dir};
use crate::ports::document::DocumentStore;

const INDENT: &[u8] = b"    ";

/// Pretty-print with a 4-space indent, keys in document order.
pub fn to_pretty_json(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// JSON documents stored as plain files on the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileStore;

impl DocumentStore for JsonFileStore {
    #[instrument(skip(self))]
    fn read(&self, path: &Path) -> Result<Value, EnricherError> {
        let bytes = fs::read(path).map_err(|source| InfrastructureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(bytes = bytes.len(), "Document read");

        let value = serde_json::from_slice(&bytes).map_err(|source| InfrastructureError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(value)
    }

    fn prepare_output(&self, path: &Path) -> Result<(), EnricherError> {
        ensure_parent_dir(path)?;
        Ok(())
    }

    #[instrument(skip(self, document))]
    fn write(&self, path: &Path, document: &Value) -> Result<(), EnricherError> {
        let content = to_pretty_json(document).map_err(|source| InfrastructureError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        atomic_write(path, &content)?;
        debug!(bytes = content.len(), "Document written");
        Ok(())
    }
}
