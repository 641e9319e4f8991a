//! Text command parsing
//!
//! One command per line; the first word selects the command.

use crate::error::{Result, ViewError};
use crate::filter::FieldSelector;
use crate::sort::SortDirection;

use super::Event;

/// A parsed line
#[derive(Debug, Clone)]
pub enum Request {
    /// Feed an event to the engine
    Apply(Event),

    /// Print the current view
    Show,

    /// End the session
    Quit,
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_request(line: &str) -> Result<Option<Request>> {
    let line = line.trim_start();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let request = match word.to_ascii_lowercase().as_str() {
        // Search text is taken verbatim; normalisation happens on apply
        "search" => Request::Apply(Event::SearchInput(rest.to_string())),
        "field" => Request::Apply(Event::FilterField(FieldSelector::parse(
            single_arg(word, rest)?,
        ))),
        "size" => Request::Apply(Event::PageSize(number_arg(word, rest)?)),
        "page" => Request::Apply(Event::GoToPage(number_arg(word, rest)?)),
        "next" => Request::Apply(Event::NextPage),
        "prev" | "previous" => Request::Apply(Event::PreviousPage),
        "clear" => Request::Apply(Event::ClearFilter),
        "sort" => Request::Apply(parse_sort(rest)?),
        "show" => Request::Show,
        "quit" | "exit" => Request::Quit,
        other => return Err(ViewError::Parse(format!("unknown command: {other}"))),
    };

    Ok(Some(request))
}

fn single_arg<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(arg), None) => Ok(arg),
        (None, _) => Err(ViewError::Parse(format!("{command}: missing argument"))),
        (Some(_), Some(_)) => Err(ViewError::Parse(format!("{command}: too many arguments"))),
    }
}

fn number_arg(command: &str, rest: &str) -> Result<usize> {
    let arg = single_arg(command, rest)?;
    arg.parse()
        .map_err(|_| ViewError::Parse(format!("{command}: not a number: {arg}")))
}

fn parse_sort(rest: &str) -> Result<Event> {
    let mut words = rest.split_whitespace();
    let field = words
        .next()
        .ok_or_else(|| ViewError::Parse("sort: missing field".to_string()))?;
    let direction = match words.next() {
        Some(dir) => SortDirection::parse(dir)
            .ok_or_else(|| ViewError::Parse(format!("sort: bad direction: {dir}")))?,
        None => SortDirection::Asc,
    };
    if words.next().is_some() {
        return Err(ViewError::Parse("sort: too many arguments".to_string()));
    }

    Ok(Event::Sort {
        field: field.to_string(),
        direction,
    })
}
