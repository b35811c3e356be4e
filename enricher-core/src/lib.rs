// enricher-core/src/lib.rs

#![allow(missing_docs)]
// 1. Memory safety
#![deny(unsafe_code)]
// 2. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 3. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// How documents are read and written, without knowing where they live.
pub mod ports;

// 2. Domain
// Manifest / Catalog documents, the enrichment join, the model inventory.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// JSON files on disk, atomic writes, configuration loading.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration: load -> join -> write.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use enricher_core::EnricherError;
pub use error::EnricherError;
