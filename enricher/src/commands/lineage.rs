// enricher/src/commands/lineage.rs
//
// USE CASE: Direct lineage of one node (depends_on + dependents).

use anyhow::Context;
use std::path::PathBuf;

use enricher_core::application::load_manifest;
use enricher_core::domain::inventory::node_lineage;
use enricher_core::infrastructure::JsonFileStore;

pub fn execute(
    project_dir: PathBuf,
    output: Option<String>,
    node_id: &str,
    format: &str,
) -> anyhow::Result<()> {
    let path = super::enriched_manifest_path(&project_dir, output)?;
    let manifest = load_manifest(&JsonFileStore, &path)
        .with_context(|| format!("Have you run 'enricher enrich'? ({})", path.display()))?;

    let lineage = node_lineage(&manifest, node_id)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&lineage)?),
        _ => {
            // Default: Mermaid
            println!("\n```mermaid");
            println!("{}", lineage.to_mermaid());
            println!("```\n");

            println!("🔗 Lineage of '{}':", lineage.model);
            println!("   Upstream: {}", lineage.dependencies.len());
            println!("   Downstream: {}", lineage.dependents.len());
        }
    }

    Ok(())
}
