//! Bounded eviction when the view returns to the live bottom.

use crate::model::HistoryError;
use crate::section::builder::Section;
use crate::store::ItemStore;
use crate::zone::{Zone, ZoneMap};
use tracing::debug;

/// Collapse all transient windows and trim the Bottom zone to `cap`.
///
/// Invoked when the user returns the view to the live bottom of the
/// conversation. With a Bottom section present, the removal range is
/// `[0, items_outside + excess)`: the stale Current/Destination remnants
/// beyond the Bottom window plus whatever the Bottom window itself holds
/// over `cap`. Afterwards the zone table is rebuilt so every remaining
/// item is tagged Bottom. The `cap` most recent items of the Bottom zone
/// are never removed.
///
/// No Bottom section -> no-op returning 0.
///
/// # Errors
/// [`HistoryError::RangeOutOfBounds`] only if `sections` is stale with
/// respect to `store` - a contract violation, since sections must be
/// rebuilt after every structural mutation.
pub fn drop_temporary_sections(
    store: &mut ItemStore,
    zones: &mut ZoneMap,
    sections: &[Section],
    cap: usize,
) -> Result<usize, HistoryError> {
    let Some(bottom) = sections.iter().find(|s| s.zone() == Zone::Bottom) else {
        return Ok(0);
    };
    let max_index = bottom.boundary().max_index;
    if max_index >= store.len() {
        return Err(HistoryError::RangeOutOfBounds {
            from: 0,
            to: max_index,
            len: store.len(),
        });
    }
    let items_outside = store.len() - 1 - max_index;
    let excess = bottom.excess_item_count(cap);
    let removed = store.remove_range(0, items_outside + excess)?;
    zones.reset_to_bottom(store.iter().map(|item| item.id()));
    if removed > 0 {
        debug!(removed, retained = store.len(), "dropped temporary sections");
    }
    Ok(removed)
}

// ===== Tests =====

#[cfg(test)]
#[path = "evict_tests.rs"]
mod tests;
