use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gallery_core::{FetchTicket, Record};
use gallery_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchedPage, PageSource,
};
use tokio::sync::oneshot;

/// Holds each page until the test releases it. Answers page `n` with a
/// single record whose id is `n`.
struct GatedPages {
    gates: Mutex<HashMap<u64, oneshot::Receiver<()>>>,
}

impl GatedPages {
    fn new(pages: &[u64]) -> (Self, HashMap<u64, oneshot::Sender<()>>) {
        let mut gates = HashMap::new();
        let mut releases = HashMap::new();
        for &page in pages {
            let (release, gate) = oneshot::channel();
            gates.insert(page, gate);
            releases.insert(page, release);
        }
        let source = Self {
            gates: Mutex::new(gates),
        };
        (source, releases)
    }
}

#[async_trait::async_trait]
impl PageSource for GatedPages {
    async fn fetch_page(&self, page_number: u64) -> Result<FetchedPage, FetchError> {
        let gate = self.gates.lock().unwrap().remove(&page_number);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(FetchedPage {
            page_number,
            records: vec![Record {
                id: page_number,
                title: String::new(),
                place_of_origin: "Unknown".to_string(),
                artist_display: "Unknown".to_string(),
                inscriptions: None,
                date_start: 0,
                date_end: 0,
            }],
            reported_total: None,
            fetched_at: None,
        })
    }
}

struct AlwaysDown;

#[async_trait::async_trait]
impl PageSource for AlwaysDown {
    async fn fetch_page(&self, _page_number: u64) -> Result<FetchedPage, FetchError> {
        Err(FetchError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        })
    }
}

fn next_arrival(events: &gallery_engine::EngineEvents) -> (FetchTicket, u64) {
    match events.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::PageFetched {
            ticket,
            page_number,
            result,
        }) => {
            let page = result.expect("page");
            assert_eq!(page.fetched_at.as_deref(), Some("2026-10-19T12:00:00Z"));
            assert_eq!(page.records[0].id, page_number);
            (ticket, page_number)
        }
        None => panic!("engine timed out"),
    }
}

#[test]
fn responses_arrive_in_completion_order_with_their_tickets() {
    gallery_logging::initialize_for_tests();
    let clock: gallery_engine::Clock = Arc::new(|| "2026-10-19T12:00:00Z".to_string());
    let (source, mut releases) = GatedPages::new(&[1, 3]);
    let (engine, events) =
        EngineHandle::with_source(Arc::new(source), Some(clock)).expect("engine");

    engine.fetch(FetchTicket(1), 3);
    engine.fetch(FetchTicket(2), 1);
    assert!(events.recv_timeout(Duration::from_millis(50)).is_none());

    releases.remove(&1).unwrap().send(()).unwrap();
    assert_eq!(next_arrival(&events), (FetchTicket(2), 1));

    releases.remove(&3).unwrap().send(()).unwrap();
    assert_eq!(next_arrival(&events), (FetchTicket(1), 3));

    assert!(events.try_recv().is_none());
}

#[test]
fn failures_are_reported_as_events() {
    let (engine, events) = EngineHandle::with_source(Arc::new(AlwaysDown), None).expect("engine");

    engine.fetch(FetchTicket(9), 4);

    match events.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::PageFetched {
            ticket,
            page_number,
            result: Err(err),
        }) => {
            assert_eq!(ticket, FetchTicket(9));
            assert_eq!(page_number, 4);
            assert_eq!(err.kind, FailureKind::Network);
        }
        other => panic!("unexpected event {other:?}"),
    }
}
