// enricher-core/src/domain/project/mod.rs

pub mod configuration;
pub mod document;

pub use configuration::{EnricherConfig, ResolvedPaths};
pub use document::{Catalog, DocumentKind, Manifest, json_type};
