//! Append-only, insertion-ordered entity registry.
//!
//! # Invariants
//! - Records are only ever appended; iteration follows insertion order.
//! - No dedup and no per-record removal. `clear` exists for test isolation.

use crate::model::Entity;

/// In-memory registry of every record constructed for one entity type.
#[derive(Debug, Clone)]
pub struct Registry<T: Entity> {
    records: Vec<T>,
}

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Entity> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record and returns its id.
    pub fn register(&mut self, record: T) -> T::Id {
        let id = record.id();
        self.records.push(record);
        id
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Records in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a, T: Entity> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
