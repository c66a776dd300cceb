//! Full rebuild of the section list from store + zone table.

use crate::model::{Item, ItemId};
use crate::section::group::{avatar_for, GroupedRun};
use crate::store::ItemStore;
use crate::zone::{Zone, ZoneMap};
use std::collections::HashSet;

/// Inclusive range of store indices covered by a zone's current items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Smallest store index carrying the zone's tag.
    pub min_index: usize,
    /// Largest store index carrying the zone's tag.
    pub max_index: usize,
}

impl Boundary {
    /// Number of indices the boundary spans, endpoints included.
    pub fn span(&self) -> usize {
        self.max_index - self.min_index + 1
    }
}

/// One zone's ordered runs plus the index boundary they cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    runs: Vec<GroupedRun>,
    zone: Zone,
    boundary: Boundary,
}

impl Section {
    fn open(
        zone: Zone,
        first: Item,
        index: usize,
        show_avatar: bool,
        revealed_ids: &HashSet<ItemId>,
    ) -> Self {
        Self {
            runs: vec![GroupedRun::open(first, index, revealed_ids, show_avatar)],
            zone,
            boundary: Boundary {
                min_index: index,
                max_index: index,
            },
        }
    }

    fn append(
        &mut self,
        item: Item,
        index: usize,
        show_avatar: bool,
        revealed_ids: &HashSet<ItemId>,
    ) {
        match self.runs.last_mut() {
            Some(run) if run.category() == item.merge_category() => {
                run.push(item, index, show_avatar);
            }
            _ => self
                .runs
                .push(GroupedRun::open(item, index, revealed_ids, show_avatar)),
        }
        self.boundary.max_index = index;
    }

    // ===== Accessors (read-only) =====

    /// Zone this section displays.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Ordered runs of the section. Never empty.
    pub fn runs(&self) -> &[GroupedRun] {
        &self.runs
    }

    /// Index boundary covered by the section's items.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Total number of items across all runs.
    pub fn item_count(&self) -> usize {
        self.runs.iter().map(GroupedRun::len).sum()
    }

    /// Number of items beyond `cap` the section currently holds.
    pub fn excess_item_count(&self, cap: usize) -> usize {
        self.boundary.span().saturating_sub(cap)
    }

    /// Item shown before the one at (`run_index`, `item_index`) in display
    /// order - the next item within a category-less run (those render item
    /// by item), otherwise the first item of the following run.
    pub fn previous_shown_item(&self, run_index: usize, item_index: usize) -> Option<&Item> {
        let run = self.runs.get(run_index)?;
        let next_run_first = || {
            self.runs
                .get(run_index + 1)
                .and_then(|next| next.items().first())
        };
        if run.category().is_none() {
            run.items().get(item_index + 1).or_else(next_run_first)
        } else {
            next_run_first()
        }
    }

    /// Item shown after the one at (`run_index`, `item_index`) in display
    /// order - the preceding item within a category-less run, otherwise the
    /// last item of the preceding run.
    pub fn next_shown_item(&self, run_index: usize, item_index: usize) -> Option<&Item> {
        let run = self.runs.get(run_index)?;
        let prev_run_last = || {
            run_index
                .checked_sub(1)
                .and_then(|prev| self.runs.get(prev))
                .and_then(|prev| prev.items().last())
        };
        if run.category().is_none() {
            match item_index.checked_sub(1) {
                Some(shown) => run.items().get(shown),
                None => prev_run_last(),
            }
        } else {
            prev_run_last()
        }
    }
}

/// Rebuild the full section list from the store, zone table, and revealed
/// set.
///
/// One O(n) left-to-right pass: untagged items default to Bottom, sections
/// appear in first-seen order, boundaries track the min/max index actually
/// carrying each tag, and avatar decisions compare each item to its
/// immediate store predecessor regardless of which section either landed in.
pub fn build_sections(
    store: &ItemStore,
    zones: &ZoneMap,
    revealed_ids: &HashSet<ItemId>,
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut prev: Option<&Item> = None;
    for (index, item) in store.iter().enumerate() {
        let zone = zones.zone_or_bottom(item.id());
        let show_avatar = avatar_for(prev, item);
        match sections.iter_mut().find(|section| section.zone() == zone) {
            Some(section) => section.append(item.clone(), index, show_avatar, revealed_ids),
            None => sections.push(Section::open(
                zone,
                item.clone(),
                index,
                show_avatar,
                revealed_ids,
            )),
        }
        prev = Some(item);
    }
    sections
}

// ===== Tests =====

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
