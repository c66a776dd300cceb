//! Message item and merge-category types.

use crate::model::{ItemId, MemberId};
use chrono::{DateTime, Utc};

/// Classification key that causes adjacent items to render as one run.
///
/// Items with equal categories merge into a single [`crate::section::GroupedRun`]
/// when adjacent; items with no category never merge with their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeCategory {
    /// A member joined the group.
    MemberConnected,
    /// The item's content was fully deleted.
    FullyDeleted,
    /// A conversation feature/preference change.
    Feature,
    /// A group event received from another member.
    RcvGroupEvent,
    /// A group event sent by this user.
    SndGroupEvent,
}

/// A single message item as seen by the windowing engine.
///
/// Identity and grouping metadata are owned by this crate; everything the
/// renderer actually draws lives in the opaque `payload`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    merge_category: Option<MergeCategory>,
    author: Option<MemberId>,
    created_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl Item {
    /// Create an item.
    ///
    /// `author` is the sender-identity key and is present only for
    /// group-received items; it drives avatar grouping, nothing else.
    pub fn new(
        id: ItemId,
        merge_category: Option<MergeCategory>,
        author: Option<MemberId>,
        created_at: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id,
            merge_category,
            author,
            created_at,
            payload,
        }
    }

    // ===== Accessors (read-only) =====

    /// Stable item identity.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Merge category; `None` means the item never groups with neighbors.
    pub fn merge_category(&self) -> Option<MergeCategory> {
        self.merge_category
    }

    /// Sender-identity key, present only for group-received items.
    pub fn author(&self) -> Option<&MemberId> {
        self.author.as_ref()
    }

    /// Item creation time, carried for the renderer.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Opaque renderer payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64) -> Item {
        Item::new(
            ItemId::new(id),
            None,
            None,
            "2025-12-25T10:00:00Z".parse().expect("valid timestamp"),
            serde_json::json!({"text": "hi"}),
        )
    }

    #[test]
    fn item_exposes_identity() {
        let item = make_item(7);
        assert_eq!(item.id(), ItemId::new(7));
    }

    #[test]
    fn item_without_category_reports_none() {
        let item = make_item(1);
        assert!(item.merge_category().is_none());
    }

    #[test]
    fn item_payload_is_preserved() {
        let item = make_item(1);
        assert_eq!(item.payload()["text"], "hi");
    }

    #[test]
    fn merge_category_equality_drives_grouping_key() {
        assert_eq!(MergeCategory::Feature, MergeCategory::Feature);
        assert_ne!(MergeCategory::Feature, MergeCategory::RcvGroupEvent);
    }
}
