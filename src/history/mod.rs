//! Single-owner state for the open conversation's windowed history.
//!
//! `ChatHistory` is the one place structural mutations happen: absorbing
//! fetched pages, reclassifying zones, revealing runs, evicting. Every
//! mutating operation takes `&mut self`, so concurrent fetch completions
//! cannot interleave their classify+absorb steps - the borrow checker
//! enforces the serialization; no internal locking exists. A fetch may
//! suspend in the caller between [`ChatHistory::begin_fetch`] and
//! [`ChatHistory::apply_page`]; merging itself is synchronous.

pub mod fetch;

pub use fetch::{FetchTicket, PageRequest};

use crate::config::HistoryConfig;
use crate::model::{ConversationId, HistoryError, Item, ItemId};
use crate::section::{build_sections, drop_temporary_sections, Section};
use crate::store::ItemStore;
use crate::zone::{PageLoad, ZoneMap};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of applying a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was classified and absorbed.
    Applied {
        /// Number of previously unknown items inserted into the store.
        added: usize,
    },
    /// The conversation changed while the fetch was in flight; the result
    /// was discarded unapplied. Not an error.
    Stale,
}

/// Windowed history state for the currently open conversation.
///
/// Owns the item store, the zone table, the revealed-run set, and the
/// derived section list. Sections are recomputed after every structural
/// change via an explicit rebuild - there is no hidden observer graph.
#[derive(Debug, Clone)]
pub struct ChatHistory {
    config: HistoryConfig,
    conversation: Option<ConversationId>,
    store: ItemStore,
    zones: ZoneMap,
    revealed: HashSet<ItemId>,
    sections: Vec<Section>,
}

impl ChatHistory {
    /// Create an empty manager with `config`. No conversation is open.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            conversation: None,
            store: ItemStore::new(),
            zones: ZoneMap::new(),
            revealed: HashSet::new(),
            sections: Vec::new(),
        }
    }

    /// Open `conversation`, discarding all state of the previous one.
    pub fn open(&mut self, conversation: ConversationId) {
        debug!(%conversation, "opening conversation");
        self.conversation = Some(conversation);
        self.store.clear();
        self.zones.clear();
        self.revealed.clear();
        self.sections.clear();
    }

    /// Close the open conversation, discarding all state.
    pub fn close(&mut self) {
        self.conversation = None;
        self.store.clear();
        self.zones.clear();
        self.revealed.clear();
        self.sections.clear();
    }

    /// Snapshot the open conversation's identity for an outgoing fetch.
    /// Returns `None` when no conversation is open.
    pub fn begin_fetch(&self) -> Option<FetchTicket> {
        self.conversation.clone().map(FetchTicket::new)
    }

    /// Apply a fetched page: verify the ticket against the open
    /// conversation, classify the items against the zone table, absorb the
    /// unknown ones at `load.position`, and rebuild the section list.
    ///
    /// A ticket for a conversation that is no longer open yields
    /// [`PageOutcome::Stale`] and leaves all state untouched.
    ///
    /// # Errors
    /// [`HistoryError::InsertOutOfBounds`] if `load.position` lies beyond
    /// the store; checked before any state is mutated.
    pub fn apply_page(
        &mut self,
        ticket: &FetchTicket,
        load: PageLoad,
        fetched: Vec<Item>,
    ) -> Result<PageOutcome, HistoryError> {
        let stale = match &self.conversation {
            Some(open) => ticket.conversation() != open,
            None => true,
        };
        if stale {
            debug!(
                fetched_for = %ticket.conversation(),
                "conversation changed mid-flight; dropping fetch result"
            );
            return Ok(PageOutcome::Stale);
        }
        if load.position > self.store.len() {
            return Err(HistoryError::InsertOutOfBounds {
                position: load.position,
                len: self.store.len(),
            });
        }

        let items_to_add = load.prepare_items(&mut self.zones, fetched);
        let added = items_to_add.len();
        self.store.absorb(load.position, items_to_add)?;
        self.rebuild_sections();
        Ok(PageOutcome::Applied { added })
    }

    /// Recompute the section list from the store, zone table, and revealed
    /// set. Called internally after every structural mutation; public for
    /// callers that change inputs out of band.
    pub fn rebuild_sections(&mut self) {
        self.sections = build_sections(&self.store, &self.zones, &self.revealed);
    }

    /// Collapse transient windows and trim the Bottom zone to the
    /// configured cap. Returns the number of items evicted.
    ///
    /// # Errors
    /// Propagates [`HistoryError::RangeOutOfBounds`] on a stale section
    /// list - impossible when sections are rebuilt after every mutation.
    pub fn drop_temporary_sections(&mut self) -> Result<usize, HistoryError> {
        let removed = drop_temporary_sections(
            &mut self.store,
            &mut self.zones,
            &self.sections,
            self.config.section_cap,
        )?;
        self.rebuild_sections();
        Ok(removed)
    }

    /// Mark a collapsed run (by its representative item id) as revealed and
    /// rebuild.
    pub fn reveal(&mut self, id: ItemId) {
        self.revealed.insert(id);
        self.rebuild_sections();
    }

    /// Collapse a previously revealed run and rebuild.
    pub fn conceal(&mut self, id: ItemId) {
        self.revealed.remove(&id);
        self.rebuild_sections();
    }

    /// Fetch descriptor for jumping to `item_id` (jump-to-message, search
    /// hit). The page budget is twice the configured preload count so the
    /// window extends both ways around the pivot.
    pub fn jump_request(&self, item_id: ItemId) -> PageRequest {
        PageRequest::Around {
            item_id,
            count: self.config.preload_count * 2,
        }
    }

    /// Fetch descriptor for the initial load of a conversation.
    pub fn initial_request(&self) -> PageRequest {
        PageRequest::Last {
            count: self.config.preload_count,
        }
    }

    // ===== Accessors (read-only) =====

    /// Identity of the open conversation, if any.
    pub fn conversation(&self) -> Option<&ConversationId> {
        self.conversation.as_ref()
    }

    /// The current section list, in first-seen zone order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The ordered item store.
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// The zone tag table.
    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }

    /// Item ids whose runs are currently revealed.
    pub fn revealed(&self) -> &HashSet<ItemId> {
        &self.revealed
    }

    /// Engine configuration.
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
