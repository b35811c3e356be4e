// enricher/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enricher")]
#[command(about = "Copies dbt catalog columns into manifest nodes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧬 Writes the enriched manifest (manifest.json + catalog.json columns)
    Enrich {
        /// Project directory (dbt project root)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Path to manifest.json (default: target/manifest.json)
        #[arg(long)]
        manifest: Option<String>,

        /// Path to catalog.json (default: target/catalog.json)
        #[arg(long)]
        catalog: Option<String>,

        /// Where to write the result (default: cache/enriched_manifest.json)
        #[arg(long, short)]
        output: Option<String>,
    },

    /// 📋 Lists the models of the enriched manifest
    Models {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Enriched manifest to read
        #[arg(long, short)]
        output: Option<String>,

        /// Include every node (seeds, tests, snapshots...), not only models
        #[arg(long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// 🔍 Shows the columns attached to one node
    Columns {
        /// Node unique id (ex: "model.jaffle_shop.orders")
        node_id: String,

        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Enriched manifest to read
        #[arg(long, short)]
        output: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// 🔗 Shows the direct upstream and downstream nodes of one node
    Lineage {
        /// Node unique id (ex: "model.jaffle_shop.orders")
        node_id: String,

        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Enriched manifest to read
        #[arg(long, short)]
        output: Option<String>,

        /// Output format: mermaid | json
        #[arg(long, default_value = "mermaid")]
        format: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Enrich {
            project_dir: PathBuf::from("."),
            manifest: None,
            catalog: None,
            output: None,
        }
    }
}
