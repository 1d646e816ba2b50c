//! Magazine domain model.
//!
//! # Responsibility
//! - Hold the mutable name/category pair of a publication.
//! - Provide soft setters that refuse invalid values without failing.
//!
//! # Invariants
//! - `name` length stays within the magazine name bounds at all times.
//! - `category` is never empty.
//! - A rejected update leaves the previous value untouched.

use crate::model::validation::{validate_category, validate_magazine_name, ValidationResult};
use crate::model::{entity_id, Entity};
use serde::Serialize;
use std::hash::{Hash, Hasher};

entity_id!(
    /// Stable identifier of a registered magazine.
    MagazineId
);

/// A named, categorized publication that holds articles.
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Validates both fields and builds a magazine with a fresh id.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is out of bounds.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: MagazineId::generate(),
            name,
            category,
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it satisfies the length bounds.
    ///
    /// Returns whether the value was applied.
    pub(crate) fn try_set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if validate_magazine_name(&name).is_err() {
            return false;
        }
        self.name = name;
        true
    }

    /// Replaces the category when it is non-empty.
    ///
    /// Returns whether the value was applied.
    pub(crate) fn try_set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if validate_category(&category).is_err() {
            return false;
        }
        self.category = category;
        true
    }
}

impl Entity for Magazine {
    type Id = MagazineId;

    fn id(&self) -> MagazineId {
        self.id
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_validates_name_then_category() {
        let err = Magazine::new("A", "").expect_err("short name must fail first");
        assert_eq!(err, ValidationError::MagazineNameLength { len: 1 });

        let err = Magazine::new("Vogue", "").expect_err("empty category must fail");
        assert_eq!(err, ValidationError::EmptyCategory);
    }

    #[test]
    fn soft_setters_keep_previous_value_on_rejection() {
        let mut magazine = Magazine::new("Vogue", "Fashion").expect("valid magazine");

        assert!(!magazine.try_set_name("A"));
        assert!(!magazine.try_set_name("x".repeat(17)));
        assert_eq!(magazine.name(), "Vogue");

        assert!(!magazine.try_set_category(""));
        assert_eq!(magazine.category(), "Fashion");

        assert!(magazine.try_set_name("Vanity Fair"));
        assert!(magazine.try_set_category("Culture"));
        assert_eq!(magazine.name(), "Vanity Fair");
        assert_eq!(magazine.category(), "Culture");
    }

    #[test]
    fn equality_is_identity_not_content() {
        let first = Magazine::new("Vogue", "Fashion").expect("valid magazine");
        let second = Magazine::new("Vogue", "Fashion").expect("valid magazine");
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
