use crate::{AppState, BrowserConfig, Effect, Msg};

/// Builds the initial state and the fetch for the first page.
pub fn init(config: BrowserConfig) -> (AppState, Vec<Effect>) {
    update(
        AppState::new(config),
        Msg::NavigateTo {
            page_index: 0,
            display_offset: 0,
        },
    )
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::NavigateTo {
            page_index,
            display_offset,
        } => vec![state.navigate_to(page_index, display_offset).into()],
        Msg::NextPage => {
            let next = state.page_index().checked_add(1);
            state
                .navigate_within_bounds(next)
                .map(Effect::from)
                .into_iter()
                .collect()
        }
        Msg::PreviousPage => {
            let previous = state.page_index().checked_sub(1);
            state
                .navigate_within_bounds(previous)
                .map(Effect::from)
                .into_iter()
                .collect()
        }
        Msg::FirstPage => state
            .navigate_within_bounds(Some(0))
            .map(Effect::from)
            .into_iter()
            .collect(),
        Msg::LastPage => {
            let last = state.config().page_count() - 1;
            state
                .navigate_within_bounds(Some(last))
                .map(Effect::from)
                .into_iter()
                .collect()
        }
        Msg::PageLoaded {
            ticket,
            page_number,
            records,
            fetched_at,
        } => {
            state.apply_page(ticket, page_number, records, fetched_at);
            Vec::new()
        }
        Msg::PageFailed {
            ticket,
            page_number,
            error,
        } => {
            state.apply_failure(ticket, page_number, &error);
            Vec::new()
        }
        Msg::TargetEdited(value) => {
            state.set_draft_target(value);
            Vec::new()
        }
        Msg::TargetSubmitted => {
            state.commit_target();
            Vec::new()
        }
        Msg::RowToggled(id) => {
            state.toggle_row(id);
            Vec::new()
        }
        Msg::SelectionSet(ids) => {
            state.set_selection(ids);
            Vec::new()
        }
    };

    (state, effects)
}
