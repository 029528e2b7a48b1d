//! Jobboard engine: listing fetches and effect execution.
mod engine;
mod fetch;
mod orchestrator;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use orchestrator::Orchestrator;
pub use types::{ConfigError, EngineError, EngineEvent, FailureKind, FetchError};
