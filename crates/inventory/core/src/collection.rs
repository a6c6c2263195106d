//! Ordered storage for a single item variant.
//!
//! [`ItemCollection`] knows nothing about weight budgets; capacity is enforced
//! one level up by [`InventoryManager`](crate::InventoryManager).

use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemId};

/// Key used by a failed by-id or by-name lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lookup {
    Id(ItemId),
    Name(String),
}

/// Errors raised by index and key based collection access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionError {
    /// Index is not in `[0, len)`.
    #[error("index {index} out of range for collection of {len} item(s)")]
    OutOfRange { index: usize, len: usize },

    /// No item matched the requested id or name.
    #[error("no item matching {0:?}")]
    NotFound(Lookup),
}

impl GameError for CollectionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "COLLECTION_OUT_OF_RANGE",
            Self::NotFound(_) => "COLLECTION_NOT_FOUND",
        }
    }
}

/// Insertion-ordered items of one variant.
///
/// Duplicates are allowed; lookups return the first match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemCollection<T> {
    items: Vec<T>,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> ItemCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` after every stored item.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, shifting later items down.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Overwrites the item at `index`, returning the displaced item.
    pub fn replace(&mut self, index: usize, item: T) -> Result<T, CollectionError> {
        self.check_index(index)?;
        Ok(core::mem::replace(&mut self.items[index], item))
    }

    /// Returns the item at `index`, or `OutOfRange` outside `[0, len)`.
    pub fn get_at(&self, index: usize) -> Result<&T, CollectionError> {
        self.items.get(index).ok_or(CollectionError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Non-failing variant of [`get_at`](Self::get_at).
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the first item called `name`.
    pub fn get_by_name(&self, name: &str) -> Result<&T, CollectionError> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .ok_or_else(|| CollectionError::NotFound(Lookup::Name(name.to_owned())))
    }

    /// Returns the first item with identifier `id`.
    pub fn get_by_id(&self, id: ItemId) -> Result<&T, CollectionError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(CollectionError::NotFound(Lookup::Id(id)))
    }

    /// Returns true if any stored item has identifier `id`.
    pub fn contains_id(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns true if any stored item is called `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Number of stored items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Exact sum of all item weights.
    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight())).sum()
    }

    fn check_index(&self, index: usize) -> Result<(), CollectionError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CollectionError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: Item + PartialEq> ItemCollection<T> {
    /// Removes the first item equal to `item`, returning it if present.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let position = self.items.iter().position(|stored| stored == item)?;
        Some(self.items.remove(position))
    }

    /// Returns true if an item equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<'a, T> IntoIterator for &'a ItemCollection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
