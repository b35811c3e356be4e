// enricher-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::project::DocumentKind;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("The {document} document must be a JSON object, found {found}")]
    #[diagnostic(
        code(enricher::domain::document_shape),
        help("Regenerate the file with `dbt compile` / `dbt docs generate`.")
    )]
    NotAnObject {
        document: DocumentKind,
        found: &'static str,
    },

    #[error("The `nodes` field of the {document} document must be a JSON object, found {found}")]
    #[diagnostic(code(enricher::domain::nodes_shape))]
    NodesNotAnObject {
        document: DocumentKind,
        found: &'static str,
    },

    #[error("Node '{node_id}' of the {document} document must be a JSON object, found {found}")]
    #[diagnostic(code(enricher::domain::node_shape))]
    NodeNotAnObject {
        document: DocumentKind,
        node_id: String,
        found: &'static str,
    },

    #[error("Node '{0}' not found in manifest")]
    #[diagnostic(
        code(enricher::domain::node_not_found),
        help("Run `enricher models --all` to list the available node ids.")
    )]
    NodeNotFound(String),
}
