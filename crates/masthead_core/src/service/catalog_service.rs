//! Catalog use-case service.
//!
//! # Responsibility
//! - Be the only public entry point that constructs (and registers) authors,
//!   magazines and articles.
//! - Expose registry contents and reset for test isolation.
//!
//! # Invariants
//! - A construction either registers exactly one record or returns a
//!   `ValidationError` and registers nothing.
//! - Query methods live in `author_queries`, `magazine_queries` and
//!   `article_ops`; all of them rescan the registries on every call.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{ValidationError, ValidationResult};
use crate::repo::catalog_repo::{CatalogRepository, InMemoryCatalogRepository};
use log::{debug, warn};
use serde::Serialize;

/// Construction and query facade over one catalog store.
pub struct Catalog<R: CatalogRepository = InMemoryCatalogRepository> {
    pub(crate) repo: R,
}

/// Read-only serializable view of every registry, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub authors: &'a [Author],
    pub magazines: &'a [Magazine],
    pub articles: &'a [Article],
}

impl Catalog<InMemoryCatalogRepository> {
    /// Creates a catalog backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalogRepository::new())
    }
}

impl Default for Catalog<InMemoryCatalogRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: CatalogRepository> Catalog<R> {
    /// Creates a catalog using the provided store implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying store.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Consumes the catalog and hands the store back.
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Validates and registers a new author.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> ValidationResult<AuthorId> {
        let author = Author::new(name).map_err(|err| log_rejected("author_create", err))?;
        let id = self.repo.authors_mut().register(author);
        debug!(
            "event=author_created module=catalog status=ok author_id={} registry_len={}",
            id,
            self.repo.authors().len()
        );
        Ok(id)
    }

    /// Validates and registers a new magazine.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is out of bounds.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<MagazineId> {
        let magazine =
            Magazine::new(name, category).map_err(|err| log_rejected("magazine_create", err))?;
        let id = self.repo.magazines_mut().register(magazine);
        debug!(
            "event=magazine_created module=catalog status=ok magazine_id={} registry_len={}",
            id,
            self.repo.magazines().len()
        );
        Ok(id)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.authors().get(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.magazines().get(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.articles().get(id)
    }

    /// Every author ever registered, in registration order.
    pub fn authors(&self) -> &[Author] {
        self.repo.authors().as_slice()
    }

    /// Every magazine ever registered, in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        self.repo.magazines().as_slice()
    }

    /// Every article ever registered, in registration order.
    pub fn articles(&self) -> &[Article] {
        self.repo.articles().as_slice()
    }

    pub fn author_count(&self) -> usize {
        self.repo.authors().len()
    }

    pub fn magazine_count(&self) -> usize {
        self.repo.magazines().len()
    }

    pub fn article_count(&self) -> usize {
        self.repo.articles().len()
    }

    /// Clears all three registries.
    pub fn reset(&mut self) {
        self.repo.clear_all();
        debug!("event=catalog_reset module=catalog status=ok");
    }

    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            authors: self.authors(),
            magazines: self.magazines(),
            articles: self.articles(),
        }
    }
}

pub(crate) fn log_rejected(event: &str, err: ValidationError) -> ValidationError {
    warn!(
        "event={} module=catalog status=rejected reason={}",
        event,
        err.reason()
    );
    err
}
