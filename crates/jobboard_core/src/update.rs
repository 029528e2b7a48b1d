use crate::query::validate_location;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => fetch_if_allowed(&mut state),
        Msg::SearchSubmitted(raw) => {
            let trimmed = raw.trim();
            match validate_location(trimmed) {
                Err(err) => {
                    // Rejected locally: query and results stay as they were.
                    state.set_validation_error(Some(err.to_string()));
                    Vec::new()
                }
                Ok(()) => {
                    state.set_validation_error(None);
                    state.query_mut().set_location(trimmed.to_string());
                    fetch_if_allowed(&mut state)
                }
            }
        }
        Msg::PageRequested(requested) => {
            let page = state.page_policy().resolve(requested, state.pagination());
            state.query_mut().set_page(page);
            fetch_if_allowed(&mut state)
        }
        Msg::JobSelected { job_id } => {
            state.select(&job_id);
            Vec::new()
        }
        Msg::FetchSucceeded { request_id, page } => {
            if state.settle(request_id) {
                state.apply_page(page);
            }
            Vec::new()
        }
        Msg::FetchFailed {
            request_id,
            error: _,
            fallback,
        } => {
            if state.settle(request_id) {
                state.apply_fallback(fallback);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn fetch_if_allowed(state: &mut AppState) -> Vec<Effect> {
    if state.query().is_fetchable() {
        vec![state.begin_fetch()]
    } else {
        Vec::new()
    }
}
