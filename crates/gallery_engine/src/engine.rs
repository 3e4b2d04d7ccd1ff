use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use gallery_core::FetchTicket;
use gallery_logging::{gallery_debug, gallery_trace};
use thiserror::Error;

use crate::fetch::{FetchSettings, PageSource, ReqwestPageSource};
use crate::{EngineEvent, FetchError};

/// Produces the timestamp attached to each fetched page.
pub type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub fetched_utc: Option<Clock>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build page source: {0}")]
    Source(#[from] FetchError),
}

enum EngineCommand {
    Fetch {
        ticket: FetchTicket,
        page_number: u64,
    },
}

/// Sends page requests to the worker thread. Cheap to clone.
///
/// Requests run concurrently and are never cancelled; responses arrive on
/// [`EngineEvents`] in completion order, not request order.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of the engine.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<(Self, EngineEvents), EngineError> {
        let source = Arc::new(ReqwestPageSource::new(config.fetch)?);
        Self::with_source(source, config.fetched_utc)
    }

    pub fn with_source(
        source: Arc<dyn PageSource>,
        fetched_utc: Option<Clock>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                let clock = fetched_utc.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), clock, command, event_tx).await;
                });
            }
            gallery_debug!("engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn fetch(&self, ticket: FetchTicket, page_number: u64) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            ticket,
            page_number,
        });
    }
}

impl EngineEvents {
    /// Blocks until the next event. `None` once the engine is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn PageSource,
    clock: Option<Clock>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            ticket,
            page_number,
        } => {
            gallery_trace!("fetch start ticket={:?} page={}", ticket, page_number);
            let result = source.fetch_page(page_number).await.map(|mut page| {
                page.fetched_at = clock.as_ref().map(|now| now());
                page
            });
            let _ = event_tx.send(EngineEvent::PageFetched {
                ticket,
                page_number,
                result,
            });
        }
    }
}
