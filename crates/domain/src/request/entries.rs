//! Ordered, individually switchable request entries

use serde::{Deserialize, Serialize};

/// An entry that can be switched off without being removed.
pub trait Toggle {
    /// Whether the entry takes part in the effective request.
    fn is_enabled(&self) -> bool;
}

/// Entries in declaration order. Duplicate keys are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entries<T> {
    items: Vec<T>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Entries<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an entry.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// All entries, enabled or not.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Number of entries, enabled or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Toggle> Entries<T> {
    /// Entries that take part in the effective request.
    pub fn enabled(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.is_enabled())
    }
}

impl<T> FromIterator<T> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Entries<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
