// enricher-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::domain::project::configuration::EnricherConfig;
use crate::infrastructure::error::InfrastructureError;

pub const ENV_MANIFEST_PATH: &str = "ENRICHER_MANIFEST_PATH";
pub const ENV_CATALOG_PATH: &str = "ENRICHER_CATALOG_PATH";
pub const ENV_OUTPUT_PATH: &str = "ENRICHER_OUTPUT_PATH";

/// Values given on the command line. They win over every other layer.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub manifest_path: Option<String>,
    pub catalog_path: Option<String>,
    pub output_path: Option<String>,
}

// --- LOADER ---

/// Defaults -> `enricher.yaml` -> `ENRICHER_*` variables -> CLI flags.
#[instrument(skip(project_dir, overrides))]
pub fn load_enricher_config(
    project_dir: &Path,
    overrides: &ConfigOverrides,
) -> Result<EnricherConfig, InfrastructureError> {
    // 1. Optional file in the project directory
    let mut config = match find_config_file(project_dir) {
        Some(path) => {
            info!(path = ?path, "Loading enricher configuration");
            load_config_file(&path)?
        }
        None => {
            debug!(dir = ?project_dir, "No enricher.yaml found, using defaults");
            EnricherConfig::default()
        }
    };

    // 2. Environment, e.g. ENRICHER_OUTPUT_PATH=/tmp/enriched.json enricher enrich
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    // 3. Command line
    apply_cli_overrides(&mut config, overrides);

    config.validate()?;
    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    ["enricher.yaml", "enricher.yml"]
        .into_iter()
        .map(|filename| root.join(filename))
        .find(|p| p.exists())
}

fn load_config_file(path: &Path) -> Result<EnricherConfig, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(|source| InfrastructureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(EnricherConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|source| InfrastructureError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_env_overrides<F>(config: &mut EnricherConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let fields = [
        (ENV_MANIFEST_PATH, &mut config.manifest_path),
        (ENV_CATALOG_PATH, &mut config.catalog_path),
        (ENV_OUTPUT_PATH, &mut config.output_path),
    ];
    for (key, field) in fields {
        if let Some(val) = lookup(key) {
            info!(key, old = ?field, new = ?val, "Overriding path via ENV");
            *field = val;
        }
    }
}

fn apply_cli_overrides(config: &mut EnricherConfig, overrides: &ConfigOverrides) {
    if let Some(val) = &overrides.manifest_path {
        config.manifest_path = val.clone();
    }
    if let Some(val) = &overrides.catalog_path {
        config.catalog_path = val.clone();
    }
    if let Some(val) = &overrides.output_path {
        config.output_path = val.clone();
    }
}
