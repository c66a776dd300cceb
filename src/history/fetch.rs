//! Fetch descriptors for the paginated read collaborator.
//!
//! This crate never performs the fetch itself: it hands the collaborator a
//! [`PageRequest`] describing what to read and a [`FetchTicket`] naming the
//! conversation the result belongs to. Pivot semantics ("around" a given
//! item) are entirely the collaborator's responsibility.

use crate::model::{ConversationId, ItemId};

/// Identity snapshot taken when a fetch is issued.
///
/// A fetch result is applied only if the open conversation still matches
/// the ticket - stale-fetch cancellation by identity check, not token
/// cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    conversation: ConversationId,
}

impl FetchTicket {
    /// Snapshot the identity of `conversation`.
    pub fn new(conversation: ConversationId) -> Self {
        Self { conversation }
    }

    /// Conversation the eventual result belongs to.
    pub fn conversation(&self) -> &ConversationId {
        &self.conversation
    }
}

/// A page read for the fetch collaborator to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Read `count` items around the pivot item.
    Around {
        /// Pivot item id.
        item_id: ItemId,
        /// Total item budget for the page.
        count: usize,
    },
    /// Read `count` items preceding the pivot item.
    Before {
        /// Pivot item id.
        item_id: ItemId,
        /// Total item budget for the page.
        count: usize,
    },
    /// Read `count` items following the pivot item.
    After {
        /// Pivot item id.
        item_id: ItemId,
        /// Total item budget for the page.
        count: usize,
    },
    /// Read the latest `count` items of the conversation.
    Last {
        /// Total item budget for the page.
        count: usize,
    },
}

// ===== Tests =====
