use std::fmt;

use jobboard_core::{PageResult, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageFetched {
        request_id: RequestId,
        result: Result<PageResult, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    /// Body was not a job listing.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid base url: {reason}")]
    BaseUrl { var: &'static str, reason: String },
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    Millis { var: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("could not build http client: {0}")]
    Client(#[from] FetchError),
}
