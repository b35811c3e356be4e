// src/ports/mod.rs

pub mod document;

pub use document::DocumentStore;
