//! Catalog store contract and in-memory implementation.
//!
//! # Responsibility
//! - Group the three entity registries behind one injectable store.
//! - Keep registry ownership out of the service layer so callers can hand a
//!   fresh store to each test.
//!
//! # Invariants
//! - Each registry is populated only through the catalog service
//!   constructors.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::registry::Registry;

/// Store interface for the author/magazine/article registries.
pub trait CatalogRepository {
    fn authors(&self) -> &Registry<Author>;
    fn authors_mut(&mut self) -> &mut Registry<Author>;
    fn magazines(&self) -> &Registry<Magazine>;
    fn magazines_mut(&mut self) -> &mut Registry<Magazine>;
    fn articles(&self) -> &Registry<Article>;
    fn articles_mut(&mut self) -> &mut Registry<Article>;

    /// Empties every registry.
    fn clear_all(&mut self) {
        self.authors_mut().clear();
        self.magazines_mut().clear();
        self.articles_mut().clear();
    }
}

/// Process-memory store; contents live as long as the value does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    authors: Registry<Author>,
    magazines: Registry<Magazine>,
    articles: Registry<Article>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn authors(&self) -> &Registry<Author> {
        &self.authors
    }

    fn authors_mut(&mut self) -> &mut Registry<Author> {
        &mut self.authors
    }

    fn magazines(&self) -> &Registry<Magazine> {
        &self.magazines
    }

    fn magazines_mut(&mut self) -> &mut Registry<Magazine> {
        &mut self.magazines
    }

    fn articles(&self) -> &Registry<Article> {
        &self.articles
    }

    fn articles_mut(&mut self) -> &mut Registry<Article> {
        &mut self.articles
    }
}
