use gallery_logging::{gallery_debug, gallery_warn};

use crate::{Record, StaleResponsePolicy};

/// Tags one page request so its response can be matched back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FetchTicket(pub u64);

/// A fetch the controller wants issued. `page_number` is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: FetchTicket,
    pub page_index: u32,
    pub page_number: u64,
}

/// Owns the zero-based page index, the display offset and the single
/// resident page of records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationController {
    page_index: u32,
    display_offset: u64,
    records: Vec<Record>,
    issued: u64,
    latest: Option<FetchTicket>,
    loading: bool,
}

impl PaginationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn display_offset(&self) -> u64 {
        self.display_offset
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn latest_ticket(&self) -> Option<FetchTicket> {
        self.latest
    }

    /// True while the most recent request has not resolved.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn navigate_to(&mut self, page_index: u32, display_offset: u64) -> PageRequest {
        self.page_index = page_index;
        self.display_offset = display_offset;
        self.issued += 1;
        let ticket = FetchTicket(self.issued);
        self.latest = Some(ticket);
        self.loading = true;
        PageRequest {
            ticket,
            page_index,
            page_number: u64::from(page_index) + 1,
        }
    }

    /// Replaces the resident records with a fetched page.
    ///
    /// Returns false when the response was discarded under `policy`.
    pub fn replace_page(
        &mut self,
        ticket: FetchTicket,
        mut records: Vec<Record>,
        page_size: u32,
        policy: StaleResponsePolicy,
    ) -> bool {
        let is_latest = self.latest == Some(ticket);
        if !is_latest && policy == StaleResponsePolicy::DiscardStale {
            gallery_debug!(
                "discarding stale page response ticket={:?} latest={:?}",
                ticket,
                self.latest
            );
            return false;
        }
        if !is_latest {
            gallery_warn!(
                "stale page response ticket={:?} overwrites page_index={}",
                ticket,
                self.page_index
            );
        }

        let limit = page_size as usize;
        if records.len() > limit {
            gallery_warn!(
                "page response held {} records, keeping the first {}",
                records.len(),
                limit
            );
            records.truncate(limit);
        }

        self.records = records;
        if is_latest {
            self.loading = false;
        }
        true
    }

    /// Records a failed fetch. The resident page is left untouched.
    ///
    /// Returns true when the failure resolved the most recent request.
    pub fn fail_page(&mut self, ticket: FetchTicket) -> bool {
        if self.latest == Some(ticket) {
            self.loading = false;
            true
        } else {
            false
        }
    }
}
