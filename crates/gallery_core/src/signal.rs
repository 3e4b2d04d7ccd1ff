//! The "page settled" signal.
//!
//! Published after every successful page replacement and after every
//! committed change of the target count. Observers run synchronously, in
//! order, inside the same update call that published the signal.

use gallery_logging::gallery_debug;

use crate::{Record, SelectionProjector, SelectionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleCause {
    /// A fetch response replaced the resident page.
    PageReplaced,
    /// The operator submitted a target count.
    TargetCommitted,
}

/// Snapshot of what just settled. `target` is the committed count at publish time.
#[derive(Debug, Clone, Copy)]
pub struct PageSettled<'a> {
    pub cause: SettleCause,
    pub page_index: u32,
    pub target: u32,
    pub records: &'a [Record],
}

pub trait SettledObserver {
    fn on_page_settled(&mut self, signal: &PageSettled<'_>);
}

pub fn publish(signal: &PageSettled<'_>, observers: &mut [&mut dyn SettledObserver]) {
    for observer in observers.iter_mut() {
        observer.on_page_settled(signal);
    }
}

/// Recomputes the selection from the projector when a page settles.
///
/// A page replacement with a zero target leaves the store to manual toggles.
/// A committed target always recomputes, so submitting zero clears the page.
pub struct ProjectionObserver<'s> {
    projector: SelectionProjector,
    store: &'s mut SelectionStore,
}

impl<'s> ProjectionObserver<'s> {
    pub fn new(projector: SelectionProjector, store: &'s mut SelectionStore) -> Self {
        Self { projector, store }
    }
}

impl SettledObserver for ProjectionObserver<'_> {
    fn on_page_settled(&mut self, signal: &PageSettled<'_>) {
        if signal.cause == SettleCause::PageReplaced && signal.target == 0 {
            return;
        }
        let written = self
            .projector
            .apply(signal.page_index, signal.target, signal.records, self.store);
        gallery_debug!(
            "projected target={} onto page_index={} ({:?}): {} of {} selected",
            signal.target,
            signal.page_index,
            signal.cause,
            written,
            signal.records.len()
        );
    }
}
