// enricher-core/src/domain/enrichment.rs
//
// Keyed left-join of catalog columns into manifest nodes.
// Builds a new manifest; neither input is modified.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;
use crate::domain::project::document::{COLUMNS, NODES};
use crate::domain::project::{Catalog, DocumentKind, Manifest, json_type};

#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub manifest: Manifest,
    pub report: EnrichmentReport,
}

/// What the join did, node by node. Ids are listed in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnrichmentReport {
    /// Manifest nodes whose `columns` were set from the catalog
    pub enriched: Vec<String>,
    /// Manifest nodes with no catalog entry, copied unchanged
    pub unmatched: Vec<String>,
    /// Catalog nodes with no manifest counterpart, ignored
    pub catalog_only: Vec<String>,
    pub columns_attached: usize,
}

pub fn enrich(manifest: &Manifest, catalog: &Catalog) -> Result<Enrichment, DomainError> {
    let mut report = EnrichmentReport::default();
    let mut root = Map::with_capacity(manifest.root().len());

    for (key, value) in manifest.root() {
        let value = if key == NODES {
            Value::Object(enrich_nodes(manifest, catalog, &mut report)?)
        } else {
            value.clone()
        };
        root.insert(key.clone(), value);
    }

    report.catalog_only = catalog
        .node_ids()
        .filter(|node_id| manifest.node(node_id).is_none())
        .cloned()
        .collect();

    Ok(Enrichment {
        manifest: Manifest::from_root(root),
        report,
    })
}

fn enrich_nodes(
    manifest: &Manifest,
    catalog: &Catalog,
    report: &mut EnrichmentReport,
) -> Result<Map<String, Value>, DomainError> {
    let mut nodes = Map::with_capacity(manifest.node_count());

    for (node_id, record) in manifest.nodes() {
        let node = match catalog.columns_for(node_id)? {
            Some(columns) => {
                let Value::Object(fields) = record else {
                    return Err(DomainError::NodeNotAnObject {
                        document: DocumentKind::Manifest,
                        node_id: node_id.clone(),
                        found: json_type(record),
                    });
                };
                report.columns_attached += columns.as_object().map_or(0, Map::len);
                report.enriched.push(node_id.clone());

                // An existing `columns` key keeps its position, a new one goes last.
                let mut fields = fields.clone();
                fields.insert(COLUMNS.to_string(), columns);
                Value::Object(fields)
            }
            None => {
                report.unmatched.push(node_id.clone());
                record.clone()
            }
        };
        nodes.insert(node_id.clone(), node);
    }

    Ok(nodes)
}
