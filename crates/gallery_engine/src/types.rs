use gallery_core::{FetchTicket, Record};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// One-based page number that was requested.
    pub page_number: u64,
    pub records: Vec<Record>,
    /// `pagination.total` as reported by the source, if any. Informational only.
    pub reported_total: Option<u64>,
    pub fetched_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    PageFetched {
        ticket: FetchTicket,
        page_number: u64,
        result: Result<FetchedPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response")]
    Malformed,
    #[error("network error")]
    Network,
}
