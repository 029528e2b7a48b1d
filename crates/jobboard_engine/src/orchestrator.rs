use std::time::Duration;

use jobboard_core::{update, AppState, Effect, FallbackJobs, Job, Msg, PagePolicy, ViewState};
use jobboard_logging::{jobboard_debug, jobboard_info, jobboard_warn};

use crate::{EngineEvent, EngineHandle};

/// Session-wide owner of the job browser state.
///
/// Commands run the pure `update` synchronously and hand any resulting fetch
/// to the engine. Completions are applied when the owner drains them with
/// [`Orchestrator::process_events`] or [`Orchestrator::wait_for_event`];
/// `update` discards those belonging to superseded requests.
pub struct Orchestrator {
    state: AppState,
    engine: EngineHandle,
    fallback: Box<dyn FallbackJobs>,
}

impl Orchestrator {
    pub fn new(
        engine: EngineHandle,
        fallback: Box<dyn FallbackJobs>,
        policy: PagePolicy,
    ) -> Self {
        Self {
            state: AppState::with_page_policy(policy),
            engine,
            fallback,
        }
    }

    /// Loads the first page of all locations.
    pub fn start(&mut self) {
        self.dispatch(Msg::SessionStarted);
    }

    pub fn search(&mut self, raw_location: &str) {
        self.dispatch(Msg::SearchSubmitted(raw_location.to_string()));
    }

    pub fn change_page(&mut self, page: i64) {
        self.dispatch(Msg::PageRequested(page));
    }

    pub fn set_selected_job(&mut self, job: &Job) {
        self.dispatch(Msg::JobSelected {
            job_id: job.job_id.clone(),
        });
    }

    pub fn view(&self) -> ViewState {
        self.state.view()
    }

    pub fn is_loading(&self) -> bool {
        self.state.pending_request().is_some()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Applies every completion that has already arrived. Returns how many.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.engine.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Blocks until one completion arrives (or `timeout` passes) and applies it.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.engine.recv_timeout(timeout) {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    fn handle_event(&mut self, event: EngineEvent) {
        let msg = match event {
            EngineEvent::PageFetched { request_id, result } => {
                if self.state.pending_request() != Some(request_id) {
                    jobboard_debug!("dropping result of superseded request {}", request_id);
                }
                match result {
                    Ok(page) => {
                        jobboard_info!(
                            "request {} returned {} jobs (page {}/{})",
                            request_id,
                            page.jobs.len(),
                            page.pagination.current_page,
                            page.pagination.total_pages
                        );
                        if !page.pagination.is_consistent() {
                            jobboard_warn!(
                                "request {} returned inconsistent pagination {:?}",
                                request_id,
                                page.pagination
                            );
                        }
                        Msg::FetchSucceeded { request_id, page }
                    }
                    Err(err) => {
                        jobboard_warn!("request {} failed: {}", request_id, err);
                        Msg::FetchFailed {
                            request_id,
                            error: err.to_string(),
                            fallback: self.fallback.fallback_page(),
                        }
                    }
                }
            }
        };
        self.dispatch(msg);
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request_id,
                    page,
                    location,
                } => {
                    jobboard_info!(
                        "FetchPage request_id={} page={} location={:?}",
                        request_id,
                        page,
                        location
                    );
                    self.engine.fetch_page(request_id, page, location);
                }
            }
        }
    }
}
