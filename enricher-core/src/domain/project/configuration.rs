// src/domain/project/configuration.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Where the enricher reads its inputs and writes its output.
///
/// Relative paths are resolved against the project directory (the dbt
/// project root), absolute paths are used as-is.
#[derive(Debug, Deserialize, Clone, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
pub struct EnricherConfig {
    /// dbt `manifest.json` (default: `target/manifest.json`)
    #[serde(rename = "manifest-path", default = "default_manifest_path")]
    #[validate(length(min = 1, message = "manifest-path cannot be empty"))]
    pub manifest_path: String,

    /// dbt `catalog.json` (default: `target/catalog.json`)
    #[serde(rename = "catalog-path", default = "default_catalog_path")]
    #[validate(length(min = 1, message = "catalog-path cannot be empty"))]
    pub catalog_path: String,

    /// Enriched manifest (default: `cache/enriched_manifest.json`)
    #[serde(rename = "output-path", default = "default_output_path")]
    #[validate(length(min = 1, message = "output-path cannot be empty"))]
    pub output_path: String,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            catalog_path: default_catalog_path(),
            output_path: default_output_path(),
        }
    }
}

impl EnricherConfig {
    pub fn resolve(&self, project_dir: &Path) -> ResolvedPaths {
        ResolvedPaths {
            manifest: project_dir.join(&self.manifest_path),
            catalog: project_dir.join(&self.catalog_path),
            output: project_dir.join(&self.output_path),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub manifest: PathBuf,
    pub catalog: PathBuf,
    pub output: PathBuf,
}

fn default_manifest_path() -> String {
    "target/manifest.json".to_string()
}
fn default_catalog_path() -> String {
    "target/catalog.json".to_string()
}
fn default_output_path() -> String {
    "cache/enriched_manifest.json".to_string()
}
