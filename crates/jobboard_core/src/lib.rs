//! Jobboard core: pure search/pagination/selection state machine and view model.
mod effect;
mod fallback;
mod model;
mod msg;
mod query;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, RequestId};
pub use fallback::{FallbackJobs, SampleJobs};
pub use model::{Job, PageResult, PaginationInfo};
pub use msg::Msg;
pub use query::{
    validate_location, LocationError, PagePolicy, PagePolicyError, QueryState, MIN_LOCATION_CHARS,
};
pub use selection::reselect;
pub use state::{AppState, FETCH_FAILED_MESSAGE};
pub use update::update;
pub use view_model::{Phase, ViewState};
