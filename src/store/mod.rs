//! Ordered item store for the open conversation.
//!
//! The store is the single mutable sequence all other components derive
//! from. Mutations shift indices, so dependents (the section builder) must
//! observe every change as a fresh recomputation - no incremental index
//! patching is assumed safe, since eviction and reclassification can both
//! shift indices in the same tick.

use crate::model::{HistoryError, Item, ItemId};
use tracing::trace;

/// Ordered, mutable sequence of message items, addressable by index and by
/// stable [`ItemId`].
///
/// Index 0 is the front of the display sequence (the end adjacent to the
/// live bottom when only the Bottom zone is present); eviction trims from
/// the front.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `items_to_add` at `position`, preserving the relative order of
    /// the added items among themselves. No-op if `items_to_add` is empty.
    ///
    /// # Errors
    /// [`HistoryError::InsertOutOfBounds`] if `position > len`.
    pub fn absorb(&mut self, position: usize, items_to_add: Vec<Item>) -> Result<(), HistoryError> {
        if items_to_add.is_empty() {
            return Ok(());
        }
        if position > self.items.len() {
            return Err(HistoryError::InsertOutOfBounds {
                position,
                len: self.items.len(),
            });
        }
        trace!(position, count = items_to_add.len(), "absorbing items");
        self.items.splice(position..position, items_to_add);
        Ok(())
    }

    /// Delete the half-open index range `from..to`, shifting subsequent
    /// indices down. Returns the number of items removed.
    ///
    /// # Errors
    /// [`HistoryError::RangeOutOfBounds`] if the range is inverted or not
    /// contained in the store.
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<usize, HistoryError> {
        if from > to || to > self.items.len() {
            return Err(HistoryError::RangeOutOfBounds {
                from,
                to,
                len: self.items.len(),
            });
        }
        trace!(from, to, "removing item range");
        self.items.drain(from..to);
        Ok(to - from)
    }

    // ===== Accessors (read-only) =====

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate items in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// All items in sequence order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Current index of the item with `id`, if present.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Check whether an item with `id` is present.
    pub fn contains(&self, id: ItemId) -> bool {
        self.position_of(id).is_some()
    }

    /// Drop all items (conversation switch).
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
