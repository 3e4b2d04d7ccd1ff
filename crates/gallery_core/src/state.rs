use gallery_logging::{gallery_debug, gallery_info, gallery_warn};

use crate::signal::{publish, PageSettled, ProjectionObserver, SettleCause, SettledObserver};
use crate::view_model::{AppViewModel, RecordRowView};
use crate::{
    BrowserConfig, FetchTicket, PageRequest, PaginationController, Record, RecordId,
    SelectionProjector, SelectionStore,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: BrowserConfig,
    pagination: PaginationController,
    selection: SelectionStore,
    target: u32,
    draft_target: Option<u32>,
    last_fetched_at: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn page_index(&self) -> u32 {
        self.pagination.page_index()
    }

    pub fn records(&self) -> &[Record] {
        self.pagination.records()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Committed target count.
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        self.pagination.latest_ticket()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = self
            .pagination
            .records()
            .iter()
            .map(|record| RecordRowView {
                id: record.id,
                selected: self.selection.contains(record.id),
                title: record.title.clone(),
                place_of_origin: record.place_of_origin.clone(),
                artist_display: record.artist_display.clone(),
                inscriptions: record.inscriptions.clone(),
                date_start: record.date_start,
                date_end: record.date_end,
            })
            .collect();

        AppViewModel {
            page_index: self.pagination.page_index(),
            page_count: self.config.page_count(),
            page_size: self.config.page_size(),
            assumed_total: self.config.assumed_total(),
            display_offset: self.pagination.display_offset(),
            rows,
            target: self.target,
            draft_target: self.draft_target,
            selected_count: self.selection.len(),
            selection_writer: self.selection.last_writer(),
            loading: self.pagination.is_loading(),
            last_fetched_at: self.last_fetched_at.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn navigate_to(&mut self, page_index: u32, display_offset: u64) -> PageRequest {
        let request = self.pagination.navigate_to(page_index, display_offset);
        gallery_info!(
            "navigate page_index={} offset={} -> fetch page {} ticket={:?}",
            page_index,
            display_offset,
            request.page_number,
            request.ticket
        );
        self.mark_dirty();
        request
    }

    /// Navigates to `page_index` if it lies within the paging bounds.
    pub(crate) fn navigate_within_bounds(
        &mut self,
        page_index: Option<u32>,
    ) -> Option<PageRequest> {
        let page_index = page_index.filter(|index| *index < self.config.page_count())?;
        let offset = u64::from(page_index) * u64::from(self.config.page_size());
        Some(self.navigate_to(page_index, offset))
    }

    pub(crate) fn apply_page(
        &mut self,
        ticket: FetchTicket,
        page_number: u64,
        records: Vec<Record>,
        fetched_at: Option<String>,
    ) {
        let replaced = self.pagination.replace_page(
            ticket,
            records,
            self.config.page_size(),
            self.config.stale_responses(),
        );
        if !replaced {
            return;
        }
        gallery_debug!(
            "page {} settled with {} records",
            page_number,
            self.pagination.records().len()
        );

        self.last_fetched_at = fetched_at;
        let resident = &self.pagination;
        self.selection
            .retain(|id| resident.records().iter().any(|record| record.id == id));
        self.publish_settled(SettleCause::PageReplaced);
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, ticket: FetchTicket, page_number: u64, error: &str) {
        gallery_warn!(
            "page {} fetch failed (ticket={:?}): {}; keeping resident page",
            page_number,
            ticket,
            error
        );
        if self.pagination.fail_page(ticket) {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_draft_target(&mut self, value: u32) {
        if self.draft_target != Some(value) {
            self.draft_target = Some(value);
            self.mark_dirty();
        }
    }

    pub(crate) fn commit_target(&mut self) {
        if let Some(draft) = self.draft_target.take() {
            self.target = draft;
        }
        gallery_info!("target committed: {}", self.target);
        self.publish_settled(SettleCause::TargetCommitted);
        self.mark_dirty();
    }

    pub(crate) fn toggle_row(&mut self, id: RecordId) {
        if !self.is_resident(id) {
            gallery_debug!("ignoring toggle for id={} not on the resident page", id);
            return;
        }
        self.selection.toggle(id);
        self.mark_dirty();
    }

    pub(crate) fn set_selection(&mut self, ids: Vec<RecordId>) {
        let (resident, foreign): (Vec<_>, Vec<_>) =
            ids.into_iter().partition(|id| self.is_resident(*id));
        if !foreign.is_empty() {
            gallery_debug!("ignoring {} ids not on the resident page", foreign.len());
        }
        self.selection.set_all(resident);
        self.mark_dirty();
    }

    fn is_resident(&self, id: RecordId) -> bool {
        self.pagination.records().iter().any(|record| record.id == id)
    }

    fn publish_settled(&mut self, cause: SettleCause) {
        let signal = PageSettled {
            cause,
            page_index: self.pagination.page_index(),
            target: self.target,
            records: self.pagination.records(),
        };
        let mut projection = ProjectionObserver::new(
            SelectionProjector::new(self.config.page_size()),
            &mut self.selection,
        );
        let mut observers: [&mut dyn SettledObserver; 1] = [&mut projection];
        publish(&signal, &mut observers);
    }
}
