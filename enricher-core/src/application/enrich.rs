// enricher-core/src/application/enrich.rs
//
// USE CASE: load manifest + catalog, join, write the enriched manifest.

use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::domain::enrichment::{Enrichment, EnrichmentReport, enrich};
use crate::domain::project::{Catalog, Manifest, ResolvedPaths};
use crate::error::EnricherError;
use crate::infrastructure::fs::absolute_path;
use crate::ports::document::DocumentStore;

#[derive(Debug, Clone)]
pub struct EnrichmentOutcome {
    /// Absolute location of the written file
    pub output_path: PathBuf,
    pub manifest_nodes: usize,
    pub report: EnrichmentReport,
}

#[instrument(
    skip(store, paths),
    fields(manifest = %paths.manifest.display(), catalog = %paths.catalog.display())
)]
pub fn enrich_project(
    store: &dyn DocumentStore,
    paths: &ResolvedPaths,
) -> Result<EnrichmentOutcome, EnricherError> {
    let start = Instant::now();

    // 1. Output directory
    store.prepare_output(&paths.output)?;

    // 2. & 3. Inputs
    let manifest = Manifest::from_value(store.read(&paths.manifest)?)?;
    let catalog = Catalog::from_value(store.read(&paths.catalog)?)?;
    let manifest_nodes = manifest.node_count();
    info!(
        manifest_nodes,
        catalog_nodes = catalog.len(),
        "Documents loaded"
    );

    // 4. Join
    let Enrichment { manifest, report } = enrich(&manifest, &catalog)?;
    if !report.catalog_only.is_empty() {
        warn!(
            count = report.catalog_only.len(),
            "Catalog nodes missing from the manifest were ignored"
        );
    }

    // 5. Write
    store.write(&paths.output, &manifest.into_value())?;

    // 6. Absolute path for the status message
    let output_path = absolute_path(&paths.output)?;
    info!(
        enriched = report.enriched.len(),
        columns = report.columns_attached,
        elapsed = ?start.elapsed(),
        "Enriched manifest written"
    );

    Ok(EnrichmentOutcome {
        output_path,
        manifest_nodes,
        report,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::JsonFileStore;
    use crate::infrastructure::error::InfrastructureError;
    use anyhow::Result;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// In-memory store recording the order of operations.
    #[derive(Default)]
    struct MemoryStore {
        documents: Mutex<HashMap<PathBuf, Value>>,
        calls: Mutex<Vec<String>>,
    }

    impl MemoryStore {
        fn with(documents: &[(&str, Value)]) -> Self {
            let store = Self::default();
            {
                let mut map = store.documents.lock().unwrap();
                for (path, value) in documents {
                    map.insert(PathBuf::from(path), value.clone());
                }
            }
            store
        }

        fn get(&self, path: &str) -> Option<Value> {
            self.documents.lock().unwrap().get(Path::new(path)).cloned()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl DocumentStore for MemoryStore {
        fn read(&self, path: &Path) -> Result<Value, EnricherError> {
            self.calls.lock().unwrap().push(format!("read {}", path.display()));
            self.documents
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| {
                    InfrastructureError::Read {
                        path: path.to_path_buf(),
                        source: std::io::ErrorKind::NotFound.into(),
                    }
                    .into()
                })
        }

        fn prepare_output(&self, path: &Path) -> Result<(), EnricherError> {
            self.calls.lock().unwrap().push(format!("prepare {}", path.display()));
            Ok(())
        }

        fn write(&self, path: &Path, document: &Value) -> Result<(), EnricherError> {
            self.calls.lock().unwrap().push(format!("write {}", path.display()));
            self.documents
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), document.clone());
            Ok(())
        }
    }

    fn paths() -> ResolvedPaths {
        ResolvedPaths {
            manifest: PathBuf::from("/p/target/manifest.json"),
            catalog: PathBuf::from("/p/target/catalog.json"),
            output: PathBuf::from("/p/cache/enriched_manifest.json"),
        }
    }

    #[test]
    fn test_enrich_project_scenario() -> Result<()> {
        let store = MemoryStore::with(&[
            (
                "/p/target/manifest.json",
                json!({ "nodes": { "modelA": { "name": "modelA" }, "modelB": { "name": "modelB" } } }),
            ),
            (
                "/p/target/catalog.json",
                json!({ "nodes": { "modelA": { "columns": { "id": { "type": "int" } } } } }),
            ),
        ]);

        let outcome = enrich_project(&store, &paths())?;

        assert_eq!(
            store.get("/p/cache/enriched_manifest.json"),
            Some(json!({ "nodes": {
                "modelA": { "name": "modelA", "columns": { "id": { "type": "int" } } },
                "modelB": { "name": "modelB" }
            }}))
        );
        assert_eq!(outcome.output_path, PathBuf::from("/p/cache/enriched_manifest.json"));
        assert_eq!(outcome.manifest_nodes, 2);
        assert_eq!(outcome.report.enriched, vec!["modelA"]);
        assert_eq!(
            store.calls(),
            vec![
                "prepare /p/cache/enriched_manifest.json",
                "read /p/target/manifest.json",
                "read /p/target/catalog.json",
                "write /p/cache/enriched_manifest.json",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_reported_output_path_is_normalized() -> Result<()> {
        let store = MemoryStore::with(&[
            ("/p/target/manifest.json", json!({ "nodes": {} })),
            ("/p/target/catalog.json", json!({ "nodes": {} })),
        ]);
        let paths = ResolvedPaths {
            output: PathBuf::from("/p/x/../cache/./enriched.json"),
            ..paths()
        };

        let outcome = enrich_project(&store, &paths)?;

        assert_eq!(outcome.output_path, PathBuf::from("/p/cache/enriched.json"));
        Ok(())
    }

    #[test]
    fn test_missing_manifest_writes_nothing() -> Result<()> {
        let store = MemoryStore::with(&[("/p/target/catalog.json", json!({ "nodes": {} }))]);

        let err = enrich_project(&store, &paths()).unwrap_err();

        assert!(matches!(
            err,
            EnricherError::Infrastructure(InfrastructureError::Read { .. })
        ));
        assert!(store.get("/p/cache/enriched_manifest.json").is_none());
        Ok(())
    }

    #[test]
    fn test_on_disk_output_dir_created_and_output_stable() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("target");
        fs::create_dir_all(&target)?;
        fs::write(
            target.join("manifest.json"),
            r#"{"metadata": {"dbt_version": "1.8.2"}, "nodes": {"model.shop.orders": {"name": "orders"}}}"#,
        )?;
        fs::write(
            target.join("catalog.json"),
            r#"{"nodes": {"model.shop.orders": {"columns": {"order_id": {"type": "INTEGER", "index": 1}}}}}"#,
        )?;
        let paths = ResolvedPaths {
            manifest: target.join("manifest.json"),
            catalog: target.join("catalog.json"),
            output: dir.path().join("backend").join("cache").join("enriched_manifest.json"),
        };

        enrich_project(&JsonFileStore, &paths)?;
        let first = fs::read(&paths.output)?;
        enrich_project(&JsonFileStore, &paths)?;
        let second = fs::read(&paths.output)?;

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first)?,
            r#"{
    "metadata": {
        "dbt_version": "1.8.2"
    },
    "nodes": {
        "model.shop.orders": {
            "name": "orders",
            "columns": {
                "order_id": {
                    "type": "INTEGER",
                    "index": 1
                }
            }
        }
    }
}"#
        );
        Ok(())
    }

    #[test]
    fn test_malformed_catalog_on_disk() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("manifest.json"), r#"{"nodes": {}}"#)?;
        fs::write(dir.path().join("catalog.json"), "not json")?;
        let paths = ResolvedPaths {
            manifest: dir.path().join("manifest.json"),
            catalog: dir.path().join("catalog.json"),
            output: dir.path().join("out").join("enriched.json"),
        };

        let err = enrich_project(&JsonFileStore, &paths).unwrap_err();

        assert!(matches!(
            err,
            EnricherError::Infrastructure(InfrastructureError::Json { .. })
        ));
        assert!(!paths.output.exists());
        Ok(())
    }
}
