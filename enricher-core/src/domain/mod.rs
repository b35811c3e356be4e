pub mod enrichment;
pub mod error;
pub mod inventory;
pub mod project;

// Handy re-exports to simplify imports elsewhere
pub use enrichment::{Enrichment, EnrichmentReport, enrich};
pub use error::DomainError;
