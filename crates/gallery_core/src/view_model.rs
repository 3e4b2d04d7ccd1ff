use crate::{RecordId, SelectionWriter};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub page_index: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub assumed_total: u64,
    pub display_offset: u64,
    pub rows: Vec<RecordRowView>,
    pub target: u32,
    pub draft_target: Option<u32>,
    pub selected_count: usize,
    pub selection_writer: Option<SelectionWriter>,
    pub loading: bool,
    pub last_fetched_at: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    pub id: RecordId,
    pub selected: bool,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: Option<String>,
    pub date_start: i64,
    pub date_end: i64,
}
