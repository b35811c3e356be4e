// enricher-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("Cannot read '{}': {source}", .path.display())]
    #[diagnostic(
        code(enricher::infra::read),
        help("Check the path. manifest.json comes from `dbt compile`, catalog.json from `dbt docs generate`.")
    )]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create output directory '{}': {source}", .path.display())]
    #[diagnostic(
        code(enricher::infra::create_dir),
        help("Check permissions on the parent directory.")
    )]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write '{}': {source}", .path.display())]
    #[diagnostic(
        code(enricher::infra::write),
        help("Check disk space and permissions on the output directory.")
    )]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File System Error: {0}")]
    #[diagnostic(code(enricher::infra::io))]
    Io(#[from] std::io::Error),

    // --- JSON ---
    #[error("Invalid JSON in '{}': {source}", .path.display())]
    #[diagnostic(
        code(enricher::infra::json),
        help("The file may be truncated. Regenerate it with dbt.")
    )]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error in '{}': {source}", .path.display())]
    #[diagnostic(
        code(enricher::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(enricher::infra::config))]
    InvalidConfig(#[from] validator::ValidationErrors),
}
