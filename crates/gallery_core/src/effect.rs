#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page from the source. `page_number` is one-based.
    FetchPage {
        ticket: crate::FetchTicket,
        page_number: u64,
    },
}

impl From<crate::PageRequest> for Effect {
    fn from(request: crate::PageRequest) -> Self {
        Effect::FetchPage {
            ticket: request.ticket,
            page_number: request.page_number,
        }
    }
}
