use super::*;
use crate::model::HistoryError;
use crate::test_harness::{make_item, make_items};
use crate::zone::Zone;

fn conv(name: &str) -> ConversationId {
    ConversationId::new(name).expect("valid conversation id")
}

fn open_history(name: &str) -> ChatHistory {
    let mut history = ChatHistory::default();
    history.open(conv(name));
    history
}

#[test]
fn new_manager_has_no_conversation() {
    let history = ChatHistory::default();
    assert!(history.conversation().is_none());
    assert!(history.begin_fetch().is_none(), "nothing to fetch for");
}

#[test]
fn apply_page_absorbs_and_rebuilds() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");

    let outcome = history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1, 2, 3]))
        .expect("in bounds");

    assert_eq!(outcome, PageOutcome::Applied { added: 3 });
    assert_eq!(history.store().len(), 3);
    assert_eq!(history.sections().len(), 1);
    assert_eq!(history.sections()[0].zone(), Zone::Bottom);
}

#[test]
fn stale_ticket_is_dropped_unapplied() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");
    history.open(conv("conv-b"));

    let outcome = history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1]))
        .expect("stale is not an error");

    assert_eq!(outcome, PageOutcome::Stale);
    assert!(history.store().is_empty(), "state must be untouched");
    assert!(history.sections().is_empty());
}

#[test]
fn closing_makes_all_tickets_stale() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");
    history.close();

    let outcome = history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1]))
        .expect("stale is not an error");
    assert_eq!(outcome, PageOutcome::Stale);
}

#[test]
fn reopening_resets_all_state() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");
    history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1, 2]))
        .expect("in bounds");
    history.reveal(crate::model::ItemId::new(1));

    history.open(conv("conv-b"));

    assert!(history.store().is_empty());
    assert!(history.zones().is_empty());
    assert!(history.revealed().is_empty());
    assert!(history.sections().is_empty());
}

#[test]
fn out_of_bounds_position_is_rejected_before_mutation() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");

    let err = history
        .apply_page(&ticket, PageLoad::new(7, Zone::Bottom), make_items(&[1]))
        .unwrap_err();

    assert_eq!(err, HistoryError::InsertOutOfBounds { position: 7, len: 0 });
    assert!(history.zones().is_empty(), "no tags from the failed page");
    assert!(history.store().is_empty());
}

#[test]
fn duplicate_page_adds_nothing() {
    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");
    history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1, 2]))
        .expect("in bounds");

    let outcome = history
        .apply_page(&ticket, PageLoad::new(0, Zone::Bottom), make_items(&[1, 2]))
        .expect("in bounds");

    assert_eq!(outcome, PageOutcome::Applied { added: 0 });
    assert_eq!(history.store().len(), 2, "no duplicate items");
}

#[test]
fn reveal_and_conceal_toggle_run_state() {
    use crate::model::{ItemId, MergeCategory};
    use crate::test_harness::make_categorized;

    let mut history = open_history("conv-a");
    let ticket = history.begin_fetch().expect("conversation open");
    history
        .apply_page(
            &ticket,
            PageLoad::new(0, Zone::Bottom),
            vec![
                make_categorized(1, MergeCategory::Feature),
                make_categorized(2, MergeCategory::Feature),
            ],
        )
        .expect("in bounds");
    assert!(!history.sections()[0].runs()[0].revealed());

    history.reveal(ItemId::new(1));
    assert!(history.sections()[0].runs()[0].revealed());

    history.conceal(ItemId::new(1));
    assert!(!history.sections()[0].runs()[0].revealed());
}

#[test]
fn eviction_trims_bottom_to_configured_cap() {
    let config = HistoryConfig {
        section_cap: 4,
        ..HistoryConfig::default()
    };
    let mut history = ChatHistory::new(config);
    history.open(conv("conv-a"));
    let ticket = history.begin_fetch().expect("conversation open");
    history
        .apply_page(
            &ticket,
            PageLoad::new(0, Zone::Bottom),
            (0..10).map(make_item).collect(),
        )
        .expect("in bounds");

    let removed = history.drop_temporary_sections().expect("fresh sections");

    assert_eq!(removed, 6);
    assert_eq!(history.store().len(), 4);
    assert_eq!(history.sections().len(), 1);
    assert_eq!(history.sections()[0].zone(), Zone::Bottom);
    assert_eq!(history.sections()[0].boundary().span(), 4);
}

#[test]
fn jump_request_budget_is_twice_preload_count() {
    use crate::model::ItemId;

    let history = ChatHistory::default();
    let request = history.jump_request(ItemId::new(50));
    assert_eq!(
        request,
        PageRequest::Around {
            item_id: ItemId::new(50),
            count: 200
        },
        "default preload count is 100"
    );
}

#[test]
fn initial_request_reads_latest_page() {
    let history = ChatHistory::default();
    assert_eq!(history.initial_request(), PageRequest::Last { count: 100 });
}
