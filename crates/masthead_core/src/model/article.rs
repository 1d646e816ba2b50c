//! Article domain model.
//!
//! # Responsibility
//! - Tie one title to exactly one author and one magazine.
//!
//! # Invariants
//! - `title` length stays within the title bounds and never changes.
//! - `author` and `magazine` are non-owning id references; the catalog only
//!   ever stores ids it has registered.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_title, ValidationResult};
use crate::model::{entity_id, Entity};
use serde::Serialize;
use std::hash::{Hash, Hasher};

entity_id!(
    /// Stable identifier of a registered article.
    ArticleId
);

/// A title linking one author to one magazine.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
}

impl Article {
    /// Validates `title` and builds an article with a fresh id.
    ///
    /// Reference validity is checked by the catalog before calling this.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is out of bounds.
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> ValidationResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: ArticleId::generate(),
            title,
            author,
            magazine,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

impl Entity for Article {
    type Id = ArticleId;

    fn id(&self) -> ArticleId {
        self.id
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::author::AuthorId;
    use crate::model::magazine::MagazineId;
    use crate::model::validation::ValidationError;

    #[test]
    fn serializes_references_as_plain_ids() {
        let author = AuthorId::generate();
        let magazine = MagazineId::generate();
        let article = Article::new(author, magazine, "How to wear a tutu").expect("valid");

        let json = serde_json::to_value(&article).expect("serializable");
        assert_eq!(json["title"], "How to wear a tutu");
        assert_eq!(json["author"], author.to_string());
        assert_eq!(json["magazine"], magazine.to_string());
        assert_eq!(json["id"], article.id().to_string());
    }

    #[test]
    fn new_rejects_out_of_bounds_title() {
        let err = Article::new(AuthorId::generate(), MagazineId::generate(), "Shrt")
            .expect_err("title of 4 chars must fail");
        assert_eq!(err, ValidationError::TitleLength { len: 4 });
    }
}
