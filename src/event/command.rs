//! Event definitions
//!
//! Everything a caller can ask of a view after construction.

use crate::config::Column;
use crate::filter::FieldSelector;
use crate::pagination::PaginationToken;
use crate::record::Record;
use crate::sort::SortDirection;

/// Event kinds, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SetRecords,
    SetColumns,
    SearchInput,
    Search,
    ClearFilter,
    FilterField,
    PageSize,
    Activate,
    GoToPage,
    PreviousPage,
    NextPage,
    Sort,
}

/// An input event
#[derive(Debug, Clone)]
pub enum Event {
    /// Replace the full record set
    SetRecords(Vec<Record>),

    /// Replace the column metadata
    SetColumns(Vec<Column>),

    /// A raw keystroke in the search box (debounced)
    SearchInput(String),

    /// Apply a search term immediately
    Search(String),

    /// Drop the active search
    ClearFilter,

    /// Select the searched field
    FilterField(FieldSelector),

    /// Select a page size
    PageSize(usize),

    /// A page control was clicked
    Activate(PaginationToken),

    /// Jump to a page
    GoToPage(usize),

    PreviousPage,
    NextPage,

    /// A column header sort was requested
    Sort {
        field: String,
        direction: SortDirection,
    },
}

impl Event {
    /// Get the event kind
    pub fn kind(&self) -> EventKind {
        match self {
            Event::SetRecords(_) => EventKind::SetRecords,
            Event::SetColumns(_) => EventKind::SetColumns,
            Event::SearchInput(_) => EventKind::SearchInput,
            Event::Search(_) => EventKind::Search,
            Event::ClearFilter => EventKind::ClearFilter,
            Event::FilterField(_) => EventKind::FilterField,
            Event::PageSize(_) => EventKind::PageSize,
            Event::Activate(_) => EventKind::Activate,
            Event::GoToPage(_) => EventKind::GoToPage,
            Event::PreviousPage => EventKind::PreviousPage,
            Event::NextPage => EventKind::NextPage,
            Event::Sort { .. } => EventKind::Sort,
        }
    }
}
