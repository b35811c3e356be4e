// enricher-core/src/application/mod.rs

pub mod enrich;
pub mod inventory;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use enricher_core::application::{enrich_project, load_manifest};`

pub use enrich::{EnrichmentOutcome, enrich_project};
pub use inventory::load_manifest;
