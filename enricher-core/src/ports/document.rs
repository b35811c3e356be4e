// enricher-core/src/ports/document.rs

// What the enrichment use case needs from storage: read a JSON document,
// make room for the output, write a JSON document. Where the bytes live is
// the adapter's business.

use serde_json::Value;
use std::path::Path;

use crate::error::EnricherError;

pub trait DocumentStore: Send + Sync {
    fn read(&self, path: &Path) -> Result<Value, EnricherError>;

    /// Makes sure `path` can be written, e.g. by creating its parent directory.
    /// Must succeed if it is already writable.
    fn prepare_output(&self, path: &Path) -> Result<(), EnricherError>;

    /// Replaces whatever is stored at `path` with `document`.
    fn write(&self, path: &Path, document: &Value) -> Result<(), EnricherError>;
}
