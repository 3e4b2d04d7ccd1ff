use std::fmt::Write as _;

use gallery_core::{AppViewModel, RecordRowView, SelectionWriter};

const TITLE_WIDTH: usize = 34;
const ORIGIN_WIDTH: usize = 16;
const ARTIST_WIDTH: usize = 28;
const INSCRIPTIONS_WIDTH: usize = 20;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", paginator_line(view));
    let _ = writeln!(
        out,
        "{:<3} {:>8}  {:<tw$}  {:<ow$}  {:<aw$}  {:<iw$}  {:>6}  {:>6}",
        "sel",
        "id",
        "Title",
        "Place of Origin",
        "Artist",
        "Inscriptions",
        "Start",
        "End",
        tw = TITLE_WIDTH,
        ow = ORIGIN_WIDTH,
        aw = ARTIST_WIDTH,
        iw = INSCRIPTIONS_WIDTH,
    );

    if view.rows.is_empty() {
        let _ = writeln!(out, "  (no records loaded)");
    }
    for row in &view.rows {
        let _ = writeln!(out, "{}", format_row(row));
    }

    let _ = writeln!(out, "{}", status_line(view));
    out
}

fn paginator_line(view: &AppViewModel) -> String {
    let first = view.display_offset + 1;
    let last = (view.display_offset + u64::from(view.page_size)).min(view.assumed_total);
    let range = if first > last {
        format!("of {}", view.assumed_total)
    } else {
        format!("{first}-{last} of {}", view.assumed_total)
    };
    format!(
        "Page {} of {} | records {}",
        u64::from(view.page_index) + 1,
        view.page_count,
        range
    )
}

fn format_row(row: &RecordRowView) -> String {
    let marker = if row.selected { "[x]" } else { "[ ]" };
    format!(
        "{marker} {:>8}  {:<tw$}  {:<ow$}  {:<aw$}  {:<iw$}  {:>6}  {:>6}",
        row.id,
        clip(&row.title, TITLE_WIDTH),
        clip(&row.place_of_origin, ORIGIN_WIDTH),
        clip(&row.artist_display, ARTIST_WIDTH),
        clip(row.inscriptions.as_deref().unwrap_or(""), INSCRIPTIONS_WIDTH),
        row.date_start,
        row.date_end,
        tw = TITLE_WIDTH,
        ow = ORIGIN_WIDTH,
        aw = ARTIST_WIDTH,
        iw = INSCRIPTIONS_WIDTH,
    )
}

fn status_line(view: &AppViewModel) -> String {
    let mut status = format!("Target: {}", view.target);
    if let Some(draft) = view.draft_target {
        let _ = write!(status, " (typed {draft}, `s` to submit)");
    }
    let _ = write!(status, " | Selected: {}", view.selected_count);
    match view.selection_writer {
        Some(SelectionWriter::Projection { target }) => {
            let _ = write!(status, " (first {target})");
        }
        Some(SelectionWriter::Operator) => status.push_str(" (manual)"),
        None => {}
    }
    if let Some(fetched_at) = &view.last_fetched_at {
        let _ = write!(status, " | Fetched {fetched_at}");
    }
    if view.loading {
        status.push_str(" | Loading...");
    }
    status
}

/// Flattens newlines and cuts `text` to `width` characters.
fn clip(text: &str, width: usize) -> String {
    let flat = text.replace(['\r', '\n'], " / ");
    if flat.chars().count() <= width {
        return flat;
    }
    let mut clipped: String = flat.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
