//! Construction-time validation rules shared by all entities.
//!
//! # Responsibility
//! - Own the text bounds for author names, magazine names/categories and
//!   article titles.
//! - Provide the single hard-failure error type for entity construction.
//!
//! # Invariants
//! - Lengths are measured in Unicode scalar values, not bytes.
//! - Bounds are inclusive on both ends.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest accepted magazine name.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Longest accepted magazine name.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Shortest accepted article title.
pub const TITLE_MIN_CHARS: usize = 5;
/// Longest accepted article title.
pub const TITLE_MAX_CHARS: usize = 50;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Hard validation failure raised while constructing an entity.
///
/// Nothing is registered when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name was the empty string.
    EmptyAuthorName,
    /// Magazine name length fell outside the accepted range.
    MagazineNameLength { len: usize },
    /// Magazine category was the empty string.
    EmptyCategory,
    /// Article title length fell outside the accepted range.
    TitleLength { len: usize },
    /// Referenced author is not registered in this catalog.
    UnknownAuthor(AuthorId),
    /// Referenced magazine is not registered in this catalog.
    UnknownMagazine(MagazineId),
}

impl ValidationError {
    /// Stable short reason used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
            Self::UnknownAuthor(_) => "unknown_author",
            Self::UnknownMagazine(_) => "unknown_magazine",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "Name must be a non-empty string"),
            Self::MagazineNameLength { len } => write!(
                f,
                "Name must be a string between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters (got {len})"
            ),
            Self::EmptyCategory => write!(f, "Category must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "Title must be a string between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters (got {len})"
            ),
            Self::UnknownAuthor(id) => write!(f, "Author must be an Author instance: {id}"),
            Self::UnknownMagazine(id) => write!(f, "Magazine must be a Magazine instance: {id}"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_author_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> ValidationResult<()> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> ValidationResult<()> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> ValidationResult<()> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_author_name, validate_category, validate_magazine_name, validate_title,
        ValidationError,
    };

    #[test]
    fn author_name_only_rejects_empty() {
        assert_eq!(
            validate_author_name(""),
            Err(ValidationError::EmptyAuthorName)
        );
        assert!(validate_author_name(" ").is_ok());
        assert!(validate_author_name("Carry Bradshaw").is_ok());
    }

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert_eq!(
            validate_magazine_name("A"),
            Err(ValidationError::MagazineNameLength { len: 1 })
        );
        assert!(validate_magazine_name("AB").is_ok());
        assert!(validate_magazine_name(&"x".repeat(16)).is_ok());
        assert_eq!(
            validate_magazine_name(&"x".repeat(17)),
            Err(ValidationError::MagazineNameLength { len: 17 })
        );
    }

    #[test]
    fn title_bounds_count_chars_not_bytes() {
        assert!(validate_title("ééééé").is_ok());
        assert_eq!(
            validate_title("four"),
            Err(ValidationError::TitleLength { len: 4 })
        );
        assert!(validate_title(&"t".repeat(50)).is_ok());
        assert_eq!(
            validate_title(&"t".repeat(51)),
            Err(ValidationError::TitleLength { len: 51 })
        );
    }

    #[test]
    fn category_rejects_empty_only() {
        assert_eq!(validate_category(""), Err(ValidationError::EmptyCategory));
        assert!(validate_category("Fashion").is_ok());
    }

    #[test]
    fn messages_mirror_construction_contract() {
        let message = ValidationError::TitleLength { len: 4 }.to_string();
        assert!(message.contains("between 5 and 50 characters"));
        assert_eq!(ValidationError::EmptyCategory.reason(), "empty_category");
    }
}
