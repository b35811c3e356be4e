// enricher/src/commands/columns.rs
//
// USE CASE: Show the columns of one node of the enriched manifest.

use anyhow::Context;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use std::path::PathBuf;

use enricher_core::application::load_manifest;
use enricher_core::domain::inventory::node_columns;
use enricher_core::infrastructure::JsonFileStore;

pub fn execute(
    project_dir: PathBuf,
    output: Option<String>,
    node_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let path = super::enriched_manifest_path(&project_dir, output)?;
    let manifest = load_manifest(&JsonFileStore, &path)
        .with_context(|| format!("Have you run 'enricher enrich'? ({})", path.display()))?;

    let columns = node_columns(&manifest, node_id)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    println!("\n🔍 Node: '{}'", node_id);
    if columns.is_empty() {
        println!("   No columns recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Column", "Type", "Comment"]);
    for column in columns {
        table.add_row(vec![
            column.name,
            column.data_type.unwrap_or_else(|| "-".to_string()),
            column.comment.unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}
