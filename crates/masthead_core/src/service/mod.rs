//! Core use-case services.
//!
//! # Responsibility
//! - Construct and register entities through one catalog facade.
//! - Answer derived queries by scanning the registries on every call.
//!
//! # Invariants
//! - Query results are never cached; they always reflect the current store.

pub mod article_ops;
pub mod author_queries;
pub mod catalog_service;
pub mod magazine_queries;
