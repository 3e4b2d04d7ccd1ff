//! Terminal input port: one command per line.

use gallery_core::{AppViewModel, Msg, RecordId};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  n, next            next page
  p, prev            previous page
  first, last        jump to the first or last page
  g, goto <page>     jump to a page (numbered from 1)
  k <count>          type a target count without submitting it
  s, submit          submit the typed target count
  select <count>     type and submit a target count
  t, toggle <id>     toggle one row by record id
  all, none          select every row on the page, or none
  r, refresh         redraw the table
  h, help            show this help
  q, quit            exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Goto(u32),
    EditTarget(u32),
    Submit,
    Select(u32),
    Toggle(RecordId),
    SelectAll,
    SelectNone,
    Redraw,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("`{0}` is not a nonnegative whole number")]
    InvalidNumber(String),
    #[error("page {requested} is outside 1..={last}")]
    PageOutOfRange { requested: u32, last: u32 },
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(InputError::Empty);
    };
    let arg = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        "first" => Command::First,
        "last" => Command::Last,
        "g" | "goto" => Command::Goto(number(arg, "goto", "a page number")?),
        "k" | "target" => Command::EditTarget(number(arg, "k", "a count")?),
        "s" | "submit" => Command::Submit,
        "select" => Command::Select(number(arg, "select", "a count")?),
        "t" | "toggle" => Command::Toggle(number(arg, "toggle", "a record id")?),
        "all" => Command::SelectAll,
        "none" => Command::SelectNone,
        "r" | "refresh" => Command::Redraw,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(InputError::Unknown(other.to_string())),
    };
    Ok(command)
}

/// Translates a command into core messages against the current view.
///
/// Commands handled by the shell itself (redraw, help, quit) yield nothing.
pub fn to_msgs(command: Command, view: &AppViewModel) -> Result<Vec<Msg>, InputError> {
    let msgs = match command {
        Command::Next => vec![Msg::NextPage],
        Command::Previous => vec![Msg::PreviousPage],
        Command::First => vec![Msg::FirstPage],
        Command::Last => vec![Msg::LastPage],
        Command::Goto(page) => {
            if page == 0 || page > view.page_count {
                return Err(InputError::PageOutOfRange {
                    requested: page,
                    last: view.page_count,
                });
            }
            let page_index = page - 1;
            vec![Msg::NavigateTo {
                page_index,
                display_offset: u64::from(page_index) * u64::from(view.page_size),
            }]
        }
        Command::EditTarget(count) => vec![Msg::TargetEdited(count)],
        Command::Submit => vec![Msg::TargetSubmitted],
        Command::Select(count) => vec![Msg::TargetEdited(count), Msg::TargetSubmitted],
        Command::Toggle(id) => vec![Msg::RowToggled(id)],
        Command::SelectAll => vec![Msg::SelectionSet(
            view.rows.iter().map(|row| row.id).collect(),
        )],
        Command::SelectNone => vec![Msg::SelectionSet(Vec::new())],
        Command::Redraw | Command::Help | Command::Quit => Vec::new(),
    };
    Ok(msgs)
}

fn number<T: std::str::FromStr>(
    arg: Option<&str>,
    command: &'static str,
    what: &'static str,
) -> Result<T, InputError> {
    let raw = arg.ok_or(InputError::MissingArgument { command, what })?;
    raw.parse()
        .map_err(|_| InputError::InvalidNumber(raw.to_string()))
}
