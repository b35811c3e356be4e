// enricher/src/commands/models.rs
//
// USE CASE: List the models of the enriched manifest.

use anyhow::Context;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use std::path::PathBuf;

use enricher_core::application::load_manifest;
use enricher_core::domain::inventory::list_models;
use enricher_core::infrastructure::JsonFileStore;

pub fn execute(
    project_dir: PathBuf,
    output: Option<String>,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let path = super::enriched_manifest_path(&project_dir, output)?;
    let manifest = load_manifest(&JsonFileStore, &path)
        .with_context(|| format!("Have you run 'enricher enrich'? ({})", path.display()))?;

    let models = list_models(&manifest, all);
    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Unique ID", "Name", "Type", "Columns"]);
    for model in &models {
        table.add_row(vec![
            model.unique_id.clone(),
            model.name.clone(),
            model.resource_type.clone(),
            model.column_count.to_string(),
        ]);
    }

    println!("{table}");
    println!("📋 {} node(s)", models.len());
    Ok(())
}
