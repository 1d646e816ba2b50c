//! Article construction and reassignment.
//!
//! # Responsibility
//! - Register articles only when both references resolve in this catalog.
//! - Provide soft reassignment of an article's author or magazine.
//!
//! # Invariants
//! - Construction checks run in order: author, magazine, title.
//! - Reassignment never fails loudly; an unresolved id leaves the article
//!   untouched and returns `false`.

use crate::model::article::{Article, ArticleId};
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{ValidationError, ValidationResult};
use crate::repo::catalog_repo::CatalogRepository;
use crate::service::catalog_service::{log_rejected, Catalog};
use log::debug;

impl<R: CatalogRepository> Catalog<R> {
    /// Validates and registers a new article.
    ///
    /// # Errors
    /// - `ValidationError::UnknownAuthor` when `author` is not registered.
    /// - `ValidationError::UnknownMagazine` when `magazine` is not registered.
    /// - `ValidationError::TitleLength` when `title` is out of bounds.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<ArticleId> {
        if !self.repo.authors().contains(author) {
            return Err(log_rejected(
                "article_create",
                ValidationError::UnknownAuthor(author),
            ));
        }
        if !self.repo.magazines().contains(magazine) {
            return Err(log_rejected(
                "article_create",
                ValidationError::UnknownMagazine(magazine),
            ));
        }
        let article = Article::new(author, magazine, title)
            .map_err(|err| log_rejected("article_create", err))?;

        let id = self.repo.articles_mut().register(article);
        debug!(
            "event=article_created module=catalog status=ok article_id={} author_id={} magazine_id={} registry_len={}",
            id,
            author,
            magazine,
            self.repo.articles().len()
        );
        Ok(id)
    }

    /// Has `author` write a new article for `magazine`.
    ///
    /// Checks the magazine first, then defers to [`Catalog::create_article`]
    /// and returns its errors unchanged.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<ArticleId> {
        if !self.repo.magazines().contains(magazine) {
            return Err(log_rejected(
                "author_add_article",
                ValidationError::UnknownMagazine(magazine),
            ));
        }
        self.create_article(author, magazine, title)
    }

    /// Points `article` at another registered author.
    ///
    /// Returns whether the reassignment was applied.
    pub fn reassign_article_author(&mut self, article: ArticleId, author: AuthorId) -> bool {
        if !self.repo.authors().contains(author) {
            debug!(
                "event=article_reassign_author module=catalog status=rejected article_id={} reason=unknown_author",
                article
            );
            return false;
        }
        match self.repo.articles_mut().get_mut(article) {
            Some(record) => {
                record.set_author(author);
                true
            }
            None => false,
        }
    }

    /// Points `article` at another registered magazine.
    ///
    /// Returns whether the reassignment was applied.
    pub fn reassign_article_magazine(&mut self, article: ArticleId, magazine: MagazineId) -> bool {
        if !self.repo.magazines().contains(magazine) {
            debug!(
                "event=article_reassign_magazine module=catalog status=rejected article_id={} reason=unknown_magazine",
                article
            );
            return false;
        }
        match self.repo.articles_mut().get_mut(article) {
            Some(record) => {
                record.set_magazine(magazine);
                true
            }
            None => false,
        }
    }
}
