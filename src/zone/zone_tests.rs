use super::*;

fn id(raw: i64) -> ItemId {
    ItemId::new(raw)
}

// ===== merge_target precedence =====

#[test]
fn bottom_requester_always_wins() {
    assert_eq!(Zone::merge_target(Zone::Bottom, Zone::Current), Zone::Bottom);
    assert_eq!(
        Zone::merge_target(Zone::Bottom, Zone::Destination),
        Zone::Bottom
    );
}

#[test]
fn existing_bottom_always_wins() {
    assert_eq!(Zone::merge_target(Zone::Current, Zone::Bottom), Zone::Bottom);
    assert_eq!(
        Zone::merge_target(Zone::Destination, Zone::Bottom),
        Zone::Bottom
    );
}

#[test]
fn non_bottom_pairs_fold_into_requester() {
    assert_eq!(
        Zone::merge_target(Zone::Destination, Zone::Current),
        Zone::Destination
    );
    assert_eq!(
        Zone::merge_target(Zone::Current, Zone::Destination),
        Zone::Current
    );
}

// ===== ZoneMap =====

#[test]
fn untagged_items_default_to_bottom() {
    let zones = ZoneMap::new();
    assert_eq!(zones.get(id(1)), None);
    assert_eq!(zones.zone_or_bottom(id(1)), Zone::Bottom);
}

#[test]
fn tag_replaces_previous_tag() {
    let mut zones = ZoneMap::new();
    zones.tag(id(1), Zone::Current);
    zones.tag(id(1), Zone::Destination);
    assert_eq!(zones.get(id(1)), Some(Zone::Destination));
    assert_eq!(zones.len(), 1, "exactly one tag per item id");
}

#[test]
fn retag_all_moves_entire_zone() {
    let mut zones = ZoneMap::new();
    zones.tag(id(1), Zone::Current);
    zones.tag(id(2), Zone::Current);
    zones.tag(id(3), Zone::Destination);

    let moved = zones.retag_all(Zone::Current, Zone::Destination);

    assert_eq!(moved, 2);
    assert_eq!(zones.count_in(Zone::Current), 0, "no item remains Current");
    assert_eq!(zones.count_in(Zone::Destination), 3);
}

#[test]
fn retag_all_to_same_zone_is_noop() {
    let mut zones = ZoneMap::new();
    zones.tag(id(1), Zone::Current);
    assert_eq!(zones.retag_all(Zone::Current, Zone::Current), 0);
    assert_eq!(zones.get(id(1)), Some(Zone::Current));
}

#[test]
fn reset_to_bottom_replaces_table() {
    let mut zones = ZoneMap::new();
    zones.tag(id(1), Zone::Destination);
    zones.tag(id(2), Zone::Current);

    zones.reset_to_bottom([id(2), id(3)].into_iter());

    assert_eq!(zones.get(id(1)), None, "stale ids must be forgotten");
    assert_eq!(zones.get(id(2)), Some(Zone::Bottom));
    assert_eq!(zones.get(id(3)), Some(Zone::Bottom));
}

#[test]
fn clear_empties_table() {
    let mut zones = ZoneMap::new();
    zones.tag(id(1), Zone::Bottom);
    zones.clear();
    assert!(zones.is_empty());
}
