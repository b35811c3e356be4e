// enricher/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing) on stderr, stdout is for results
    // RUST_LOG=debug enricher enrich ... to see the details
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Enrich {
            project_dir,
            manifest,
            catalog,
            output,
        } => commands::enrich::execute(project_dir, manifest, catalog, output),

        Commands::Models {
            project_dir,
            output,
            all,
            json,
        } => commands::models::execute(project_dir, output, all, json),

        Commands::Columns {
            node_id,
            project_dir,
            output,
            json,
        } => commands::columns::execute(project_dir, output, &node_id, json),

        Commands::Lineage {
            node_id,
            project_dir,
            output,
            format,
        } => commands::lineage::execute(project_dir, output, &node_id, &format),
    }
}
