//! Core domain logic for Masthead.
//! In-memory author/magazine/article graph with derived queries.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ValidationError, ValidationResult, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
    TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use model::Entity;
pub use repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository};
pub use repo::registry::Registry;
pub use service::catalog_service::{Catalog, CatalogSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
