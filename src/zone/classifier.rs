//! Classification of freshly fetched pages against the zone table.

use crate::model::Item;
use crate::zone::{Zone, ZoneMap};
use tracing::debug;

/// An in-flight page load: where absorbed items will be inserted and which
/// zone requested the fetch.
///
/// Constructed by the renderer when scrolling approaches a section edge, or
/// by the history owner for a jump-to-item load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLoad {
    /// Store index at which the prepared items will be absorbed.
    pub position: usize,
    /// Zone that requested the fetch.
    pub zone: Zone,
}

impl PageLoad {
    /// Create a page load descriptor.
    pub fn new(position: usize, zone: Zone) -> Self {
        Self { position, zone }
    }

    /// Classify a fetched page against the zone table.
    ///
    /// Returns the subset of `fetched` not already present, in fetch order;
    /// those items are tagged with the requesting zone. As a side effect,
    /// any already-known item reachable from a different zone triggers a
    /// full-zone merge: every item of its old zone is retagged to the merge
    /// target, because two zones sharing one item are the same logical
    /// window from then on.
    pub fn prepare_items(&self, zones: &mut ZoneMap, fetched: Vec<Item>) -> Vec<Item> {
        let mut items_to_add = Vec::new();
        for item in fetched {
            match zones.get(item.id()) {
                None => items_to_add.push(item),
                Some(existing) if existing == self.zone => {}
                Some(existing) => {
                    let target = Zone::merge_target(self.zone, existing);
                    debug!(
                        item = %item.id(),
                        requesting = ?self.zone,
                        ?existing,
                        ?target,
                        "fetched item known to another zone"
                    );
                    zones.retag_all(existing, target);
                }
            }
        }
        for item in &items_to_add {
            zones.tag(item.id(), self.zone);
        }
        items_to_add
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
