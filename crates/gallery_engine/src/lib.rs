//! Gallery engine: page fetching, record normalization and effect execution.
mod engine;
mod fetch;
mod normalize;
mod types;

pub use engine::{Clock, EngineConfig, EngineError, EngineEvents, EngineHandle};
pub use fetch::{FetchSettings, PageSource, ReqwestPageSource, ARTWORK_FIELDS, DEFAULT_BASE_URL};
pub use normalize::{normalize_page, normalize_record, UNKNOWN};
pub use types::{EngineEvent, FailureKind, FetchError, FetchedPage};
