pub mod project;

pub use crate::domain::project::EnricherConfig;
pub use project::{ConfigOverrides, load_enricher_config};
