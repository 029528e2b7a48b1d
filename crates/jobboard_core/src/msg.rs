use crate::{PageResult, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Session opened; load the first page of all locations.
    SessionStarted,
    /// User submitted the location search box (raw, untrimmed text).
    SearchSubmitted(String),
    /// User asked for a page, possibly out of range.
    PageRequested(i64),
    /// User picked a job from the list.
    JobSelected { job_id: String },
    /// The gateway answered a fetch.
    FetchSucceeded {
        request_id: RequestId,
        page: PageResult,
    },
    /// The gateway failed a fetch; `fallback` is shown in its place.
    FetchFailed {
        request_id: RequestId,
        error: String,
        fallback: PageResult,
    },
}
