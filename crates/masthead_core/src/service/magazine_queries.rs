//! Magazine mutation and derived queries.
//!
//! # Responsibility
//! - Soft-update magazine name/category through the catalog.
//! - Answer per-magazine article, title and contributor queries.
//! - Pick the top publisher across the whole magazine registry.
//!
//! # Invariants
//! - `contributing_authors` uses a strict `> 2` article threshold.
//! - `top_publisher` keeps the first magazine found at the maximum count.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::catalog_service::Catalog;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Articles an author needs to exceed to count as a contributing author.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

impl<R: CatalogRepository> Catalog<R> {
    /// Renames `magazine` when the name satisfies the length bounds.
    ///
    /// Returns whether the rename was applied; unknown ids return `false`.
    pub fn rename_magazine(&mut self, magazine: MagazineId, name: impl Into<String>) -> bool {
        let applied = self
            .repo
            .magazines_mut()
            .get_mut(magazine)
            .is_some_and(|record| record.try_set_name(name));
        if !applied {
            debug!(
                "event=magazine_rename module=catalog status=rejected magazine_id={}",
                magazine
            );
        }
        applied
    }

    /// Changes the category of `magazine` when the value is non-empty.
    ///
    /// Returns whether the change was applied; unknown ids return `false`.
    pub fn recategorize_magazine(
        &mut self,
        magazine: MagazineId,
        category: impl Into<String>,
    ) -> bool {
        let applied = self
            .repo
            .magazines_mut()
            .get_mut(magazine)
            .is_some_and(|record| record.try_set_category(category));
        if !applied {
            debug!(
                "event=magazine_recategorize module=catalog status=rejected magazine_id={}",
                magazine
            );
        }
        applied
    }

    /// Articles currently published in `magazine`, in registry order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> Vec<&Article> {
        self.repo
            .articles()
            .iter()
            .filter(|article| article.magazine() == magazine)
            .collect()
    }

    /// Distinct authors who wrote for `magazine`. Unordered.
    pub fn magazine_contributors(&self, magazine: MagazineId) -> HashSet<&Author> {
        let authors = self.repo.authors();
        self.magazine_articles(magazine)
            .into_iter()
            .filter_map(|article| authors.get(article.author()))
            .collect()
    }

    /// Titles of [`Catalog::magazine_articles`], same order.
    pub fn magazine_article_titles(&self, magazine: MagazineId) -> Vec<&str> {
        self.magazine_articles(magazine)
            .into_iter()
            .map(Article::title)
            .collect()
    }

    /// Authors with more than two articles in `magazine`. Unordered.
    pub fn magazine_contributing_authors(&self, magazine: MagazineId) -> HashSet<&Author> {
        let mut counts: HashMap<_, usize> = HashMap::new();
        for article in self.magazine_articles(magazine) {
            *counts.entry(article.author()).or_default() += 1;
        }

        let authors = self.repo.authors();
        counts
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
            .filter_map(|(author, _)| authors.get(author))
            .collect()
    }

    /// Magazine with the most articles, or `None` when none are registered.
    ///
    /// Ties go to the magazine registered first.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in self.repo.magazines() {
            let count = self.magazine_articles(magazine.id()).len();
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }
}
