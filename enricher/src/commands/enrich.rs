// enricher/src/commands/enrich.rs
//
// USE CASE: Copy catalog columns into the manifest and save the result.

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

use enricher_core::application::enrich_project;
use enricher_core::infrastructure::JsonFileStore;
use enricher_core::infrastructure::config::{ConfigOverrides, load_enricher_config};

pub fn execute(
    project_dir: PathBuf,
    manifest: Option<String>,
    catalog: Option<String>,
    output: Option<String>,
) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        manifest_path: manifest,
        catalog_path: catalog,
        output_path: output,
    };
    let config = load_enricher_config(&project_dir, &overrides).with_context(|| {
        format!(
            "Failed to load enricher configuration from {:?}",
            project_dir
        )
    })?;
    let paths = config.resolve(&project_dir);
    debug!(?paths, "Resolved paths");

    let outcome = enrich_project(&JsonFileStore, &paths).with_context(|| {
        format!(
            "Failed to enrich {} with {}",
            paths.manifest.display(),
            paths.catalog.display()
        )
    })?;

    let report = &outcome.report;
    println!(
        "   Nodes: {} ({} enriched, {} without catalog entry)",
        outcome.manifest_nodes,
        report.enriched.len(),
        report.unmatched.len()
    );
    println!("   Columns attached: {}", report.columns_attached);
    if !report.catalog_only.is_empty() {
        println!(
            "   ⚠️  {} catalog node(s) not in the manifest were ignored",
            report.catalog_only.len()
        );
    }

    println!(
        "✨ Enriched manifest saved to {}",
        outcome.output_path.display()
    );
    Ok(())
}
