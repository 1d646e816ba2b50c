//! Derived queries over the articles an author wrote.

use crate::model::article::Article;
use crate::model::author::AuthorId;
use crate::model::magazine::Magazine;
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::catalog_service::Catalog;
use std::collections::HashSet;

impl<R: CatalogRepository> Catalog<R> {
    /// Articles currently attributed to `author`, in registry order.
    pub fn author_articles(&self, author: AuthorId) -> Vec<&Article> {
        self.repo
            .articles()
            .iter()
            .filter(|article| article.author() == author)
            .collect()
    }

    /// Distinct magazines `author` has written for. Unordered.
    pub fn author_magazines(&self, author: AuthorId) -> HashSet<&Magazine> {
        let magazines = self.repo.magazines();
        self.author_articles(author)
            .into_iter()
            .filter_map(|article| magazines.get(article.magazine()))
            .collect()
    }

    /// Distinct categories across [`Catalog::author_magazines`]. Unordered.
    pub fn author_topic_areas(&self, author: AuthorId) -> HashSet<&str> {
        self.author_magazines(author)
            .into_iter()
            .map(Magazine::category)
            .collect()
    }
}
