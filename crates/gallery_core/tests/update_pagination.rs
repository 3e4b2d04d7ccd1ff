use std::sync::Once;

use gallery_core::{
    init, update, AppState, BrowserConfig, Effect, FetchTicket, Msg, Record, StaleResponsePolicy,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

fn records(first_id: u64, len: u64) -> Vec<Record> {
    (first_id..first_id + len)
        .map(|id| Record {
            id,
            title: format!("Artwork {id}"),
            place_of_origin: "Unknown".to_string(),
            artist_display: "Unknown".to_string(),
            inscriptions: None,
            date_start: 1900,
            date_end: 1901,
        })
        .collect()
}

fn fetch_of(effects: &[Effect]) -> (FetchTicket, u64) {
    match effects {
        [Effect::FetchPage {
            ticket,
            page_number,
        }] => (*ticket, *page_number),
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn loaded(ticket: FetchTicket, page_number: u64, records: Vec<Record>) -> Msg {
    Msg::PageLoaded {
        ticket,
        page_number,
        records,
        fetched_at: Some("2026-10-19T00:00:00+00:00".to_string()),
    }
}

#[test]
fn init_requests_first_upstream_page() {
    init_logging();
    let (state, effects) = init(BrowserConfig::default());

    let (_, page_number) = fetch_of(&effects);
    assert_eq!(page_number, 1);
    let view = state.view();
    assert_eq!(view.page_index, 0);
    assert_eq!(view.display_offset, 0);
    assert!(view.loading);
    assert!(view.rows.is_empty());
}

#[test]
fn navigation_translates_to_one_based_page_number() {
    init_logging();
    let (state, _) = init(BrowserConfig::default());

    let (mut state, effects) = update(
        state,
        Msg::NavigateTo {
            page_index: 4,
            display_offset: 48,
        },
    );

    let (_, page_number) = fetch_of(&effects);
    assert_eq!(page_number, 5);
    assert_eq!(state.view().page_index, 4);
    assert_eq!(state.view().display_offset, 48);
    assert!(state.consume_dirty());
}

#[test]
fn loaded_page_replaces_records_wholesale() {
    init_logging();
    let (state, effects) = init(BrowserConfig::default());
    let (ticket, page_number) = fetch_of(&effects);
    let (state, _) = update(state, loaded(ticket, page_number, records(1, 12)));

    let (state, effects) = update(state, Msg::NextPage);
    let (ticket, page_number) = fetch_of(&effects);
    assert_eq!(page_number, 2);
    let (state, effects) = update(state, loaded(ticket, page_number, records(13, 12)));

    assert!(effects.is_empty());
    let ids: Vec<_> = state.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, (13..=24).collect::<Vec<_>>());
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(
        view.last_fetched_at.as_deref(),
        Some("2026-10-19T00:00:00+00:00")
    );
}

#[test]
fn failed_fetch_keeps_resident_page() {
    init_logging();
    let (state, effects) = init(BrowserConfig::default());
    let (ticket, page_number) = fetch_of(&effects);
    let (state, _) = update(state, loaded(ticket, page_number, records(1, 12)));
    let (state, _) = update(state, Msg::TargetEdited(3));
    let (state, _) = update(state, Msg::TargetSubmitted);
    let before_records = state.records().to_vec();
    let before_selection = state.selection().clone();

    let (state, effects) = update(state, Msg::NextPage);
    let (ticket, page_number) = fetch_of(&effects);
    let (state, effects) = update(
        state,
        Msg::PageFailed {
            ticket,
            page_number,
            error: "http status 503".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.records(), before_records.as_slice());
    assert_eq!(state.selection(), &before_selection);
    assert_eq!(state.target(), 3);
    assert_eq!(state.page_index(), 1);
    assert!(!state.view().loading);
}

#[test]
fn stale_response_is_discarded_by_default() {
    init_logging();
    let (state, first) = init(BrowserConfig::default());
    let (first_ticket, _) = fetch_of(&first);
    let (state, second) = update(state, Msg::NextPage);
    let (second_ticket, _) = fetch_of(&second);

    let (state, _) = update(state, loaded(second_ticket, 2, records(13, 12)));
    let (state, _) = update(state, loaded(first_ticket, 1, records(1, 12)));

    assert_eq!(state.page_index(), 1);
    assert_eq!(state.records()[0].id, 13);
}

#[test]
fn stale_response_clobbers_page_under_last_writer_wins() {
    init_logging();
    let config =
        BrowserConfig::default().with_stale_responses(StaleResponsePolicy::LastWriterWins);
    let (state, first) = init(config);
    let (first_ticket, _) = fetch_of(&first);
    let (state, second) = update(state, Msg::NextPage);
    let (second_ticket, _) = fetch_of(&second);

    let (state, _) = update(state, loaded(second_ticket, 2, records(13, 12)));
    let (state, _) = update(state, loaded(first_ticket, 1, records(1, 12)));

    assert_eq!(state.page_index(), 1);
    assert_eq!(state.records()[0].id, 1);
}

#[test]
fn paging_helpers_respect_assumed_total() {
    init_logging();
    let (state, _) = init(BrowserConfig::default());

    let (state, effects) = update(state, Msg::PreviousPage);
    assert!(effects.is_empty());
    assert_eq!(state.page_index(), 0);

    let (state, effects) = update(state, Msg::LastPage);
    let (_, page_number) = fetch_of(&effects);
    assert_eq!(page_number, 20);
    assert_eq!(state.view().display_offset, 228);

    let (state, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
    assert_eq!(state.page_index(), 19);

    let (state, effects) = update(state, Msg::FirstPage);
    let (_, page_number) = fetch_of(&effects);
    assert_eq!(page_number, 1);
    assert_eq!(state.view().page_count, 20);
}

#[test]
fn oversized_page_is_truncated_to_page_size() {
    init_logging();
    let config = BrowserConfig::new(4, 40).unwrap();
    let (state, effects) = init(config);
    let (ticket, page_number) = fetch_of(&effects);

    let (state, _) = update(state, loaded(ticket, page_number, records(1, 9)));

    assert_eq!(state.records().len(), 4);
}

#[test]
fn zero_page_size_is_rejected() {
    assert!(BrowserConfig::new(0, 240).is_err());
    assert_eq!(BrowserConfig::new(12, 0).unwrap().page_count(), 1);
    assert_eq!(BrowserConfig::new(12, 245).unwrap().page_count(), 21);
}

#[test]
fn default_state_is_empty() {
    let state = AppState::default();
    assert_eq!(state.latest_ticket(), None);
    assert_eq!(state.view().page_size, 12);
    assert_eq!(state.view().assumed_total, 240);
}

#[test]
fn paging_past_a_bound_leaves_state_untouched() {
    init_logging();
    let (mut state, _) = init(BrowserConfig::default());
    state.consume_dirty();

    let (mut next, effects) = update(state.clone(), Msg::PreviousPage);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, state);
}
