//! Gallery core: pure state machine, selection projection and view-model helpers.
mod config;
mod effect;
mod msg;
mod pagination;
mod projector;
mod record;
mod selection;
mod signal;
mod state;
mod update;
mod view_model;

pub use config::{
    BrowserConfig, ConfigError, StaleResponsePolicy, DEFAULT_ASSUMED_TOTAL, DEFAULT_PAGE_SIZE,
};
pub use effect::Effect;
pub use msg::Msg;
pub use pagination::{FetchTicket, PageRequest, PaginationController};
pub use projector::{projected_count, SelectionProjector};
pub use record::{Record, RecordId};
pub use selection::{SelectionStore, SelectionWriter};
pub use signal::{publish, PageSettled, ProjectionObserver, SettleCause, SettledObserver};
pub use state::AppState;
pub use update::{init, update};
pub use view_model::{AppViewModel, RecordRowView};
