// enricher-core/src/domain/inventory.rs
//
// Read-only views over an (enriched) manifest, for listing in the CLI.

use serde::Serialize;
use serde_json::Value;

use crate::domain::error::DomainError;
use crate::domain::project::Manifest;
use crate::domain::project::document::COLUMNS;

const MODEL: &str = "model";
const DEPENDS_ON: &str = "depends_on";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub unique_id: String,
    pub name: String,
    pub resource_type: String,
    pub column_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub data_type: Option<String>,
    pub comment: Option<String>,
}

/// Nodes whose `resource_type` is `model`, or every node with `include_all`.
pub fn list_models(manifest: &Manifest, include_all: bool) -> Vec<ModelSummary> {
    manifest
        .nodes()
        .filter_map(|(node_id, record)| {
            let resource_type = str_field(record, &["resource_type"]).unwrap_or("unknown");
            if !include_all && resource_type != MODEL {
                return None;
            }
            Some(ModelSummary {
                unique_id: node_id.clone(),
                name: str_field(record, &["name"]).unwrap_or(node_id.as_str()).to_string(),
                resource_type: resource_type.to_string(),
                column_count: record
                    .get(COLUMNS)
                    .and_then(Value::as_object)
                    .map_or(0, |columns| columns.len()),
            })
        })
        .collect()
}

/// Columns of one node in document order.
///
/// Reads catalog-style fields (`type`, `comment`) first and falls back to the
/// manifest-style ones (`data_type`, `description`).
pub fn node_columns(manifest: &Manifest, node_id: &str) -> Result<Vec<ColumnSummary>, DomainError> {
    let record = manifest
        .node(node_id)
        .ok_or_else(|| DomainError::NodeNotFound(node_id.to_string()))?;

    let Some(columns) = record.get(COLUMNS).and_then(Value::as_object) else {
        return Ok(Vec::new());
    };

    Ok(columns
        .iter()
        .map(|(name, column)| ColumnSummary {
            name: name.clone(),
            data_type: str_field(column, &["type", "data_type"]).map(String::from),
            comment: str_field(column, &["comment", "description"])
                .filter(|c| !c.is_empty())
                .map(String::from),
        })
        .collect())
}

/// Direct upstream (`depends_on.nodes`) and downstream neighbours of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lineage {
    pub unique_id: String,
    pub model: String,
    pub dependencies: Vec<String>,
    pub dependents: Vec<String>,
}

impl Lineage {
    pub fn to_mermaid(&self) -> String {
        let mut lines = vec!["graph LR".to_string()];

        let all = self
            .dependencies
            .iter()
            .chain(std::iter::once(&self.unique_id))
            .chain(&self.dependents);
        for node_id in all {
            lines.push(format!("    {}[\"{}\"]", mermaid_id(node_id), node_id));
        }

        let target = mermaid_id(&self.unique_id);
        for parent in &self.dependencies {
            lines.push(format!("    {} --> {}", mermaid_id(parent), target));
        }
        for child in &self.dependents {
            lines.push(format!("    {} --> {}", target, mermaid_id(child)));
        }

        lines.join("\n")
    }
}

pub fn node_lineage(manifest: &Manifest, node_id: &str) -> Result<Lineage, DomainError> {
    let record = manifest
        .node(node_id)
        .ok_or_else(|| DomainError::NodeNotFound(node_id.to_string()))?;

    let dependents = manifest
        .nodes()
        .filter(|(_, other)| upstream_nodes(other).any(|parent| parent == node_id))
        .map(|(child_id, _)| child_id.clone())
        .collect();

    Ok(Lineage {
        unique_id: node_id.to_string(),
        model: str_field(record, &["name"]).unwrap_or(node_id).to_string(),
        dependencies: upstream_nodes(record).map(String::from).collect(),
        dependents,
    })
}

fn upstream_nodes(record: &Value) -> impl Iterator<Item = &str> {
    record
        .get(DEPENDS_ON)
        .and_then(|depends_on| depends_on.get("nodes"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

// Mermaid ids cannot contain dots
fn mermaid_id(node_id: &str) -> String {
    node_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn str_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn manifest() -> Result<Manifest> {
        Ok(Manifest::from_value(json!({
            "nodes": {
                "model.shop.orders": {
                    "name": "orders",
                    "resource_type": "model",
                    "columns": {
                        "order_id": { "type": "INTEGER", "index": 1, "comment": null },
                        "status": { "data_type": "varchar", "description": "Order status" }
                    }
                },
                "seed.shop.raw_orders": { "name": "raw_orders", "resource_type": "seed" },
                "model.shop.customers": {
                    "resource_type": "model",
                    "depends_on": { "macros": [], "nodes": ["model.shop.orders", "seed.shop.raw_orders"] }
                }
            }
        }))?)
    }

    #[test]
    fn test_list_models_filters_on_resource_type() -> Result<()> {
        let models = list_models(&manifest()?, false);
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "orders");
        assert_eq!(models[0].column_count, 2);
        // Falls back to the node id when `name` is missing
        assert_eq!(models[1].name, "model.shop.customers");
        assert_eq!(models[1].column_count, 0);

        let all = list_models(&manifest()?, true);
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].resource_type, "seed");
        Ok(())
    }

    #[test]
    fn test_node_columns_reads_both_styles() -> Result<()> {
        let columns = node_columns(&manifest()?, "model.shop.orders")?;
        assert_eq!(
            columns,
            vec![
                ColumnSummary {
                    name: "order_id".into(),
                    data_type: Some("INTEGER".into()),
                    comment: None,
                },
                ColumnSummary {
                    name: "status".into(),
                    data_type: Some("varchar".into()),
                    comment: Some("Order status".into()),
                },
            ]
        );
        assert!(node_columns(&manifest()?, "model.shop.customers")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_node_columns_unknown_node() -> Result<()> {
        let err = node_columns(&manifest()?, "model.shop.nope").unwrap_err();
        assert!(matches!(err, DomainError::NodeNotFound(id) if id == "model.shop.nope"));
        Ok(())
    }

    #[test]
    fn test_node_lineage_upstream_and_downstream() -> Result<()> {
        let lineage = node_lineage(&manifest()?, "model.shop.customers")?;
        assert_eq!(lineage.model, "model.shop.customers");
        assert_eq!(
            lineage.dependencies,
            vec!["model.shop.orders", "seed.shop.raw_orders"]
        );
        assert!(lineage.dependents.is_empty());

        let orders = node_lineage(&manifest()?, "model.shop.orders")?;
        assert_eq!(orders.model, "orders");
        assert!(orders.dependencies.is_empty());
        assert_eq!(orders.dependents, vec!["model.shop.customers"]);
        Ok(())
    }

    #[test]
    fn test_node_lineage_unknown_node() -> Result<()> {
        let err = node_lineage(&manifest()?, "model.shop.nope").unwrap_err();
        assert!(matches!(err, DomainError::NodeNotFound(id) if id == "model.shop.nope"));
        Ok(())
    }

    #[test]
    fn test_lineage_to_mermaid() -> Result<()> {
        let mermaid = node_lineage(&manifest()?, "model.shop.orders")?.to_mermaid();
        assert_eq!(
            mermaid,
            "graph LR\n    model_shop_orders[\"model.shop.orders\"]\n    model_shop_customers[\"model.shop.customers\"]\n    model_shop_orders --> model_shop_customers"
        );
        Ok(())
    }
}
