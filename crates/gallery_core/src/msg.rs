#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Paginator moved to a zero-based page index and display offset.
    NavigateTo { page_index: u32, display_offset: u64 },
    /// Paginator "next" control.
    NextPage,
    /// Paginator "previous" control.
    PreviousPage,
    /// Paginator "first" control.
    FirstPage,
    /// Paginator "last" control.
    LastPage,
    /// Engine delivered a page of normalized records.
    PageLoaded {
        ticket: crate::FetchTicket,
        page_number: u64,
        records: Vec<crate::Record>,
        fetched_at: Option<String>,
    },
    /// Engine failed to fetch a page.
    PageFailed {
        ticket: crate::FetchTicket,
        page_number: u64,
        error: String,
    },
    /// User typed a target count into the input box (not yet committed).
    TargetEdited(u32),
    /// User submitted the typed target count.
    TargetSubmitted,
    /// User toggled one row's selection.
    RowToggled(crate::RecordId),
    /// User replaced the whole selection (select all / none).
    SelectionSet(Vec<crate::RecordId>),
}
