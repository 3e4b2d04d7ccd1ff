use std::sync::mpsc;
use std::thread;

use gallery_core::{Effect, Msg};
use gallery_engine::{EngineConfig, EngineError, EngineEvent, EngineEvents, EngineHandle};
use gallery_logging::{gallery_debug, gallery_info};

use super::app::LoopEvent;

/// Executes core effects on the engine and feeds its results back to the loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        config: EngineConfig,
        loop_tx: mpsc::Sender<LoopEvent>,
    ) -> Result<Self, EngineError> {
        let page_size = config.fetch.page_size;
        let (engine, events) = EngineHandle::new(config)?;
        spawn_event_pump(events, loop_tx, page_size);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    ticket,
                    page_number,
                } => {
                    gallery_info!("FetchPage ticket={:?} page_number={}", ticket, page_number);
                    self.engine.fetch(ticket, page_number);
                }
            }
        }
    }
}

fn spawn_event_pump(events: EngineEvents, loop_tx: mpsc::Sender<LoopEvent>, page_size: u32) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if loop_tx.send(LoopEvent::Msg(map_event(event, page_size))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent, page_size: u32) -> Msg {
    match event {
        EngineEvent::PageFetched {
            ticket,
            page_number,
            result: Ok(page),
        } => {
            if page.records.len() < page_size as usize {
                gallery_debug!(
                    "page {} is short: {} of {} records",
                    page_number,
                    page.records.len(),
                    page_size
                );
            }
            Msg::PageLoaded {
                ticket,
                page_number,
                records: page.records,
                fetched_at: page.fetched_at,
            }
        }
        EngineEvent::PageFetched {
            ticket,
            page_number,
            result: Err(err),
        } => Msg::PageFailed {
            ticket,
            page_number,
            error: err.to_string(),
        },
    }
}
