//! Registry layer for in-memory entity storage.
//!
//! # Responsibility
//! - Provide append-only registries per entity type.
//! - Define the injectable store contract consumed by the service layer.
//!
//! # Invariants
//! - Registries never reorder, dedup, or remove individual records.

pub mod catalog_repo;
pub mod registry;
