use crate::{Job, PaginationInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; fallback content is shown.
    Degraded,
}

/// Everything presentation needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub jobs: Vec<Job>,
    pub selected_job: Option<Job>,
    pub pagination: PaginationInfo,
    pub loading: bool,
    pub fetch_error: Option<String>,
    pub validation_error: Option<String>,
    pub phase: Phase,
    pub location_filter: String,
    pub current_page: i64,
}
