// enricher/src/commands/mod.rs

pub mod columns;
pub mod enrich;
pub mod lineage;
pub mod models;

use anyhow::Context;
use std::path::{Path, PathBuf};

use enricher_core::infrastructure::config::{ConfigOverrides, load_enricher_config};

/// Location of the enriched manifest for the read-only commands.
fn enriched_manifest_path(project_dir: &Path, output: Option<String>) -> anyhow::Result<PathBuf> {
    let overrides = ConfigOverrides {
        output_path: output,
        ..ConfigOverrides::default()
    };
    let config = load_enricher_config(project_dir, &overrides).with_context(|| {
        format!(
            "Failed to load enricher configuration from {:?}",
            project_dir
        )
    })?;
    Ok(config.resolve(project_dir).output)
}
