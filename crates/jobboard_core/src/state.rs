use crate::selection::reselect;
use crate::view_model::{Phase, ViewState};
use crate::{Effect, Job, PagePolicy, PageResult, PaginationInfo, QueryState, RequestId};

/// Banner text shown whenever the listing service could not be used.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load jobs. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    query: QueryState,
    page_policy: PagePolicy,
    jobs: Vec<Job>,
    pagination: PaginationInfo,
    selected_job_id: Option<String>,
    phase: Phase,
    fetch_error: Option<String>,
    validation_error: Option<String>,
    last_request_id: RequestId,
    pending_request: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_policy(page_policy: PagePolicy) -> Self {
        Self {
            page_policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            jobs: self.jobs.clone(),
            selected_job: self.selected_job().cloned(),
            pagination: self.pagination,
            loading: self.phase == Phase::Loading,
            fetch_error: self.fetch_error.clone(),
            validation_error: self.validation_error.clone(),
            phase: self.phase,
            location_filter: self.query.location_filter().to_string(),
            current_page: self.query.current_page(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn page_policy(&self) -> PagePolicy {
        self.page_policy
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending_request
    }

    pub fn selected_job(&self) -> Option<&Job> {
        let id = self.selected_job_id.as_deref()?;
        self.jobs.iter().find(|job| job.job_id == id)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryState {
        &mut self.query
    }

    pub(crate) fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    pub(crate) fn set_validation_error(&mut self, message: Option<String>) {
        if self.validation_error != message {
            self.validation_error = message;
            self.mark_dirty();
        }
    }

    /// Moves to `Loading` and allocates the id that supersedes any in-flight fetch.
    pub(crate) fn begin_fetch(&mut self) -> Effect {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.pending_request = Some(request_id);
        self.phase = Phase::Loading;
        self.mark_dirty();
        Effect::FetchPage {
            request_id,
            page: self.query.current_page(),
            location: self.query.location_filter().to_string(),
        }
    }

    /// Consumes the pending request if `request_id` is it; false for stale completions.
    pub(crate) fn settle(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        true
    }

    pub(crate) fn apply_page(&mut self, page: PageResult) {
        self.replace_results(page);
        self.fetch_error = None;
        self.phase = Phase::Loaded;
    }

    pub(crate) fn apply_fallback(&mut self, fallback: PageResult) {
        self.replace_results(fallback);
        self.fetch_error = Some(FETCH_FAILED_MESSAGE.to_string());
        self.phase = Phase::Degraded;
    }

    /// Selects `job_id` when it is in the current list; false otherwise.
    pub(crate) fn select(&mut self, job_id: &str) -> bool {
        if !self.jobs.iter().any(|job| job.job_id == job_id) {
            return false;
        }
        if self.selected_job_id.as_deref() != Some(job_id) {
            self.selected_job_id = Some(job_id.to_string());
            self.mark_dirty();
        }
        true
    }

    fn replace_results(&mut self, page: PageResult) {
        let PageResult { jobs, pagination } = page;
        let selected =
            reselect(&jobs, self.selected_job_id.as_deref()).map(|job| job.job_id.clone());
        self.jobs = jobs;
        self.pagination = pagination;
        self.selected_job_id = selected;
        self.mark_dirty();
    }
}
