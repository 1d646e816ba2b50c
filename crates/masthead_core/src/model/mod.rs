//! Domain model for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three entity records and their text invariants.
//! - Define identity types used for every cross-entity reference.
//!
//! # Invariants
//! - Entity equality and hashing use identity (the id), never field values.
//! - Entities are only constructed by the catalog service, which registers
//!   them in the same step.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

/// Record stored in an append-only registry.
pub trait Entity {
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Stable identity of this record.
    fn id(&self) -> Self::Id;
}

/// Declares a `Uuid` newtype identifier with the shared derive set.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            ///
            /// The result is only meaningful to a catalog that registered it.
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use entity_id;
