use std::sync::Once;

use jobboard_core::{update, AppState, Effect, Job, Msg, PageResult, PaginationInfo, Phase};
use pretty_assertions::assert_eq;

const VALIDATION_MESSAGE: &str = "Please enter at least 3 characters to search";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobboard_logging::initialize_for_tests);
}

fn job(id: &str) -> Job {
    Job {
        job_id: id.to_string(),
        title: format!("Job {id}"),
        company: "Acme".to_string(),
        location: "Bengaluru".to_string(),
        ..Job::default()
    }
}

fn request_id(effects: &[Effect]) -> u64 {
    match effects {
        [Effect::FetchPage { request_id, .. }] => *request_id,
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

/// Session with one loaded page of three jobs over 3 pages.
fn loaded_state() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            request_id: request_id(&effects),
            page: PageResult {
                jobs: vec![job("1"), job("2"), job("3")],
                pagination: PaginationInfo {
                    current_page: 1,
                    total_pages: 3,
                    total_jobs: 50,
                    has_next: true,
                    has_prev: false,
                },
            },
        },
    );
    state
}

#[test]
fn session_start_fetches_first_page_of_all_locations() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);

    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            request_id: 1,
            page: 1,
            location: String::new(),
        }]
    );
    assert!(state.view().loading);
    assert_eq!(state.view().phase, Phase::Loading);
}

#[test]
fn short_location_is_rejected_without_fetching() {
    init_logging();
    let before = loaded_state();
    let before_view = before.view();

    for raw in ["NY", " a ", "\tLA\n", "Kö"] {
        let (after, effects) = update(before.clone(), Msg::SearchSubmitted(raw.to_string()));
        let view = after.view();

        assert!(effects.is_empty(), "{raw:?} must not fetch");
        assert_eq!(view.validation_error.as_deref(), Some(VALIDATION_MESSAGE));
        assert_eq!(view.jobs, before_view.jobs);
        assert_eq!(view.pagination, before_view.pagination);
        assert_eq!(view.location_filter, before_view.location_filter);
        assert_eq!(view.current_page, before_view.current_page);
        assert_eq!(after.query(), before.query());
    }
}

#[test]
fn accepted_search_trims_resets_page_and_fetches_once() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::PageRequested(3));
    let (state, _) = update(state, Msg::SearchSubmitted("NY".to_string()));
    assert!(state.view().validation_error.is_some());

    for (raw, expected) in [("  Bengaluru ", "Bengaluru"), ("   ", ""), ("Pune", "Pune")] {
        let (next, effects) = update(state.clone(), Msg::SearchSubmitted(raw.to_string()));
        let view = next.view();

        assert_eq!(view.validation_error, None);
        assert_eq!(view.location_filter, expected);
        assert_eq!(view.current_page, 1);
        assert!(view.loading);
        match effects.as_slice() {
            [Effect::FetchPage { page, location, .. }] => {
                assert_eq!(*page, 1);
                assert_eq!(location, expected);
            }
            other => panic!("expected one fetch, got {other:?}"),
        }
    }
}

#[test]
fn repeating_the_same_search_fetches_again() {
    init_logging();
    let (state, first) = update(AppState::new(), Msg::SearchSubmitted("Remote".to_string()));
    let (_, second) = update(state, Msg::SearchSubmitted("Remote".to_string()));

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(request_id(&first), request_id(&second));
}

#[test]
fn page_change_keeps_validation_error() {
    init_logging();
    let (state, _) = update(loaded_state(), Msg::SearchSubmitted("NY".to_string()));
    let (state, effects) = update(state, Msg::PageRequested(2));

    assert_eq!(effects.len(), 1);
    assert_eq!(
        state.view().validation_error.as_deref(),
        Some(VALIDATION_MESSAGE)
    );
}

#[test]
fn rejected_search_marks_state_dirty_only_when_banner_changes() {
    init_logging();
    let mut state = loaded_state();
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SearchSubmitted("NY".to_string()));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SearchSubmitted("LA".to_string()));
    assert!(!state.consume_dirty());
}
