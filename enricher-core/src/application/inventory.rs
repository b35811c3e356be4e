// enricher-core/src/application/inventory.rs

use std::path::Path;
use tracing::instrument;

use crate::domain::project::Manifest;
use crate::error::EnricherError;
use crate::ports::document::DocumentStore;

/// Load a manifest (typically the enriched one) for listing.
#[instrument(skip(store))]
pub fn load_manifest(store: &dyn DocumentStore, path: &Path) -> Result<Manifest, EnricherError> {
    let manifest = Manifest::from_value(store.read(path)?)?;
    Ok(manifest)
}
