//! Author domain model.
//!
//! # Invariants
//! - `name` is never empty and never changes after construction.

use crate::model::validation::{validate_author_name, ValidationResult};
use crate::model::{entity_id, Entity};
use serde::Serialize;
use std::hash::{Hash, Hasher};

entity_id!(
    /// Stable identifier of a registered author.
    AuthorId
);

/// A named party who writes articles.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Validates `name` and builds an author with a fresh id.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub(crate) fn new(name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: AuthorId::generate(),
            name,
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Author {
    type Id = AuthorId;

    fn id(&self) -> AuthorId {
        self.id
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
