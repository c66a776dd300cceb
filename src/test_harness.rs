//! Shared test factories.
//!
//! Item builders used across unit, acceptance, and property tests.

use crate::model::{Item, ItemId, MemberId, MergeCategory};
use chrono::{DateTime, Duration, Utc};

/// Fixed base timestamp so test items are deterministic.
pub fn base_timestamp() -> DateTime<Utc> {
    "2025-11-02T09:00:00Z".parse().expect("valid timestamp")
}

/// Plain text item with no merge category and no author.
pub fn make_item(id: i64) -> Item {
    Item::new(
        ItemId::new(id),
        None,
        None,
        base_timestamp() + Duration::seconds(id),
        serde_json::json!({ "text": format!("message {id}") }),
    )
}

/// Item carrying a merge category.
pub fn make_categorized(id: i64, category: MergeCategory) -> Item {
    Item::new(
        ItemId::new(id),
        Some(category),
        None,
        base_timestamp() + Duration::seconds(id),
        serde_json::json!({ "event": format!("event {id}") }),
    )
}

/// Group-received item attributed to `member`.
pub fn make_authored(id: i64, member: &str) -> Item {
    Item::new(
        ItemId::new(id),
        None,
        Some(MemberId::new(member).expect("valid member id")),
        base_timestamp() + Duration::seconds(id),
        serde_json::json!({ "text": format!("message {id}") }),
    )
}

/// Item carrying both a merge category and an author.
pub fn make_authored_event(id: i64, category: MergeCategory, member: &str) -> Item {
    Item::new(
        ItemId::new(id),
        Some(category),
        Some(MemberId::new(member).expect("valid member id")),
        base_timestamp() + Duration::seconds(id),
        serde_json::json!({ "event": format!("event {id}") }),
    )
}

/// Batch of plain items in the given id order.
pub fn make_items(ids: &[i64]) -> Vec<Item> {
    ids.iter().copied().map(make_item).collect()
}

/// Raw ids of a slice of items, in order.
pub fn ids_of(items: &[Item]) -> Vec<i64> {
    items.iter().map(|item| item.id().get()).collect()
}
