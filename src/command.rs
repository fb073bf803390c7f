//! Line-oriented commands read from the terminal.

use crate::error::{ErrorKind, Result};
use bookcase_view::host::FormData;
use bookcase_view::{Event, Theme};

pub const HELP: &str = "\
Commands:
  search                      show the search form and its choices
  search [title=..] [genre=..] [author=..]
                              filter the list (omitted fields match anything)
  more                        reveal the next page
  open <n>                    show details for item n of the list
  close                       close the detail view
  settings                    show the settings form
  theme <day|night>           switch theme
  cancel                      close the search or settings form
  help                        show this message
  quit                        exit";

const SEARCH_FIELDS: [&str; 3] = ["title", "genre", "author"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Event),
    /// Closes whichever form is open.
    Cancel,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let command = match name {
        "" => return Ok(None),
        "search" if rest.is_empty() => Command::Dispatch(Event::OpenSearch),
        "search" => Command::Dispatch(Event::SubmitSearch(search_form(rest)?)),
        "more" => Command::Dispatch(Event::ShowMore),
        "open" => Command::Dispatch(Event::Activate(position(rest)?)),
        "close" => Command::Dispatch(Event::CloseDetail),
        "settings" => Command::Dispatch(Event::OpenSettings),
        "theme" => Command::Dispatch(Event::SubmitSettings(theme_form(rest)?)),
        "cancel" => Command::Cancel,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => exn::bail!(ErrorKind::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// `key=value` pairs; words without `=` continue the previous value, so
/// `title=the name of` searches for "the name of".
fn search_form(args: &str) -> Result<FormData> {
    let mut fields: Vec<(&str, String)> = Vec::new();
    for word in args.split_whitespace() {
        match word.split_once('=') {
            Some((key, value)) if SEARCH_FIELDS.contains(&key) => fields.push((key, value.to_string())),
            Some((key, _)) => exn::bail!(ErrorKind::InvalidArgument(format!("unknown search field `{key}`"))),
            None => match fields.last_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(word);
                },
                None => exn::bail!(ErrorKind::InvalidArgument(format!("expected field=value, found `{word}`"))),
            },
        }
    }
    Ok(fields.into_iter().collect())
}

/// One-based list position, as printed, to a zero-based index.
fn position(arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => exn::bail!(ErrorKind::InvalidArgument(format!("expected a list number, found `{arg}`"))),
    }
}

fn theme_form(arg: &str) -> Result<FormData> {
    let theme = match arg {
        "day" => Theme::Day,
        "night" => Theme::Night,
        _ => exn::bail!(ErrorKind::InvalidArgument(format!("expected `day` or `night`, found `{arg}`"))),
    };
    Ok(FormData::new().with("theme", theme.as_str()))
}
