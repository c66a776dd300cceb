//! Logical zones over the conversation's item sequence.
//!
//! Every stored item carries exactly one zone tag. The tag table is
//! conversation-scoped state owned by the history owner and passed by
//! reference to the classifier and section builder; it is reset wholesale
//! when the conversation changes.

pub mod classifier;

pub use classifier::PageLoad;

use crate::model::ItemId;
use std::collections::HashMap;
use tracing::debug;

/// One of the three logical windows into the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Most recent items, attached to the composer. Always wins merges.
    Bottom,
    /// The window the user is viewing after jumping into history.
    Current,
    /// A target window being loaded (jump-to-message, search result).
    Destination,
}

impl Zone {
    /// Zone that survives when the zone `existing` is reached from a fetch
    /// issued by `requesting`.
    ///
    /// Bottom has merge priority from either side; otherwise the requesting
    /// zone absorbs the existing one (Destination is subordinate to Current
    /// and Bottom only through the Bottom rule - two non-Bottom zones fold
    /// into the requester).
    pub fn merge_target(requesting: Zone, existing: Zone) -> Zone {
        if requesting == Zone::Bottom || existing == Zone::Bottom {
            Zone::Bottom
        } else {
            requesting
        }
    }
}

/// Conversation-scoped mapping from item id to zone tag.
///
/// Lookups for untagged items default to [`Zone::Bottom`] at sectioning
/// time; the map itself stores only explicit tags.
#[derive(Debug, Clone, Default)]
pub struct ZoneMap {
    tags: HashMap<ItemId, Zone>,
}

impl ZoneMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit tag for `id`, if any.
    pub fn get(&self, id: ItemId) -> Option<Zone> {
        self.tags.get(&id).copied()
    }

    /// Tag for `id`, defaulting untagged items to Bottom.
    pub fn zone_or_bottom(&self, id: ItemId) -> Zone {
        self.get(id).unwrap_or(Zone::Bottom)
    }

    /// Set the tag for `id`, replacing any previous tag.
    pub fn tag(&mut self, id: ItemId, zone: Zone) {
        self.tags.insert(id, zone);
    }

    /// Retag every item currently tagged `from` to `to` (full-zone merge).
    /// Returns the number of items moved.
    pub fn retag_all(&mut self, from: Zone, to: Zone) -> usize {
        if from == to {
            return 0;
        }
        let mut moved = 0;
        for tag in self.tags.values_mut() {
            if *tag == from {
                *tag = to;
                moved += 1;
            }
        }
        if moved > 0 {
            debug!(?from, ?to, moved, "merged zone");
        }
        moved
    }

    /// Replace the whole table, tagging exactly `ids` as Bottom.
    pub fn reset_to_bottom(&mut self, ids: impl Iterator<Item = ItemId>) {
        self.tags = ids.map(|id| (id, Zone::Bottom)).collect();
    }

    /// Drop all tags (conversation switch).
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Number of explicitly tagged items.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no items are tagged.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of items explicitly tagged `zone`.
    pub fn count_in(&self, zone: Zone) -> usize {
        self.tags.values().filter(|tag| **tag == zone).count()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "zone_tests.rs"]
mod tests;
