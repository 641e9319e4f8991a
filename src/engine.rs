//! Engine Module
//!
//! The view engine that coordinates all components.
//!
//! ## Responsibilities
//! - Own the configuration, the current `ViewState` and its `ViewSnapshot`
//! - Route every input operation to a state transition
//! - Re-render the snapshot before each operation returns
//! - Hold the pending debounced search, if any

use std::time::Instant;

use crate::config::{Column, Config, SelectOption};
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::event::Event;
use crate::filter::{FieldSelector, SearchTerm};
use crate::pagination::PaginationToken;
use crate::record::Record;
use crate::sort::SortDirection;
use crate::summary::Summary;
use crate::view::{ViewSnapshot, ViewState};

/// The main view engine
///
/// ## Execution Model: single owner, synchronous
///
/// - Every operation takes `&mut self`, applies one pure transition to the
///   current `ViewState`, and re-renders the `ViewSnapshot`
/// - Nothing runs in the background; the only deferred work is the pending
///   search term, released by `poll` once its quiet period has passed
/// - Outputs are read from the snapshot, so readers never see a half-applied
///   operation
pub struct Engine {
    /// View configuration
    config: Config,

    /// Current inputs (records, filter, page, sort)
    state: ViewState,

    /// Outputs derived from `state`
    snapshot: ViewSnapshot,

    /// Search text waiting out its quiet period
    pending_search: Debouncer<String>,
}

impl Engine {
    /// Create an empty engine with the given config
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let state = ViewState::new(config.default_page_size(), config.sort_scope);
        let snapshot = ViewSnapshot::render(&state, &config);
        let pending_search = Debouncer::new(config.search_delay);

        Ok(Self {
            config,
            state,
            snapshot,
            pending_search,
        })
    }

    /// Create an engine and assign its records (convenience method)
    pub fn with_records(config: Config, records: Vec<Record>) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.set_records(records);
        Ok(engine)
    }

    /// Execute an event, using the wall clock for debounced input
    pub fn execute(&mut self, event: Event) {
        self.execute_at(event, Instant::now());
    }

    /// Execute an event at the given instant
    ///
    /// Routes events to the matching operation.
    pub fn execute_at(&mut self, event: Event, now: Instant) {
        tracing::trace!("Executing {:?}", event.kind());
        match event {
            Event::SetRecords(records) => self.set_records(records),
            Event::SetColumns(columns) => self.set_columns(columns),
            Event::SearchInput(raw) => self.input_search(raw, now),
            Event::Search(raw) => self.search(&raw),
            Event::ClearFilter => self.clear_filter(),
            Event::FilterField(selector) => self.set_filter_field(selector),
            Event::PageSize(size) => self.set_page_size(size),
            Event::Activate(token) => self.activate(token),
            Event::GoToPage(number) => self.go_to_page(number),
            Event::PreviousPage => self.previous_page(),
            Event::NextPage => self.next_page(),
            Event::Sort { field, direction } => self.apply_sort(field, direction),
        }
    }

    // =========================================================================
    // Dataset
    // =========================================================================

    /// Replace all records; clears any filter
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.transition(|state| state.with_records(records));
    }

    /// Replace the column metadata
    ///
    /// A filter field that is no longer a column falls back to all fields.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.config.columns = columns;

        let stale = match self.state.selector() {
            FieldSelector::Field(field) if !self.config.has_column(field) => Some(field.clone()),
            _ => None,
        };
        if let Some(field) = stale {
            tracing::warn!("Filter field {} is no longer a column, searching all fields", field);
            self.transition(|state| state.with_selector(FieldSelector::All));
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Record a keystroke; the search runs once input has been quiet for
    /// the configured delay (see `poll`)
    pub fn input_search(&mut self, raw: impl Into<String>, now: Instant) {
        let raw = raw.into();
        tracing::trace!("Search input {:?}, due in {:?}", raw, self.pending_search.delay());
        self.pending_search.schedule(raw, now);
    }

    /// Apply the pending search if its quiet period is over at `now`
    ///
    /// Returns whether a search was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_search.poll(now) {
            Some(raw) => {
                self.search(&raw);
                true
            }
            None => false,
        }
    }

    /// Apply the pending search right away
    pub fn flush_search(&mut self) -> bool {
        match self.pending_search.flush() {
            Some(raw) => {
                self.search(&raw);
                true
            }
            None => false,
        }
    }

    /// Drop the pending search without applying it
    pub fn cancel_search(&mut self) {
        self.pending_search.cancel_all();
    }

    /// When the pending search becomes due
    pub fn search_due_at(&self) -> Option<Instant> {
        self.pending_search.due_at()
    }

    /// Apply raw search text against the current filter field
    ///
    /// Text that normalises to nothing clears the filter instead.
    pub fn search(&mut self, raw: &str) {
        let term = SearchTerm::normalize(raw);
        if term.is_empty() {
            self.clear_filter();
        } else {
            let selector = self.state.selector().clone();
            self.transition(|state| state.with_filter(selector, term));
        }
    }

    /// Filter by `term` under `selector`; back to page 1
    ///
    /// An empty term matches nothing. Use `clear_filter` to stop filtering.
    pub fn apply_filter(&mut self, selector: FieldSelector, term: &str) {
        let term = SearchTerm::normalize(term);
        self.transition(|state| state.with_filter(selector, term));
    }

    /// Stop filtering; back to page 1
    pub fn clear_filter(&mut self) {
        self.transition(ViewState::cleared_filter);
    }

    /// Select the searched field, re-running an active search
    pub fn set_filter_field(&mut self, selector: FieldSelector) {
        self.transition(|state| state.with_selector(selector));
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Select a page size; back to page 1
    pub fn set_page_size(&mut self, size: usize) {
        if size != 0 && !self.config.page_size_options.contains(&size) {
            tracing::debug!("Page size {} is not one of the configured options", size);
        }
        self.transition(|state| state.with_page_size(size));
    }

    /// Jump to a page (clamped into range)
    pub fn go_to_page(&mut self, number: usize) {
        self.transition(|state| state.at_page(number));
    }

    pub fn previous_page(&mut self) {
        self.transition(ViewState::previous_page);
    }

    pub fn next_page(&mut self) {
        self.transition(ViewState::next_page);
    }

    /// React to a clicked page control; ellipses are ignored
    pub fn activate(&mut self, token: PaginationToken) {
        match token {
            PaginationToken::Previous => self.previous_page(),
            PaginationToken::Next => self.next_page(),
            PaginationToken::Page { number, .. } => self.go_to_page(number),
            PaginationToken::Ellipsis => {}
        }
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sort by a column
    pub fn apply_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        let field = field.into();
        self.transition(|state| state.with_sort(field, direction));
    }

    /// Remove the column sort
    pub fn clear_sort(&mut self) {
        self.transition(ViewState::without_sort);
    }

    /// Apply a transition and re-render
    fn transition(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        self.state = f(self.state.clone());
        self.snapshot = ViewSnapshot::render(&self.state, &self.config);
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// All derived outputs
    pub fn snapshot(&self) -> &ViewSnapshot {
        &self.snapshot
    }

    /// The view window: records to paint
    pub fn visible_records(&self) -> &[Record] {
        &self.snapshot.records
    }

    /// Page controls, with the current page flagged
    pub fn pagination_tokens(&self) -> &[PaginationToken] {
        &self.snapshot.tokens
    }

    pub fn summary(&self) -> Summary {
        self.snapshot.summary
    }

    /// "Showing x to y of n entries ..."
    pub fn summary_message(&self) -> String {
        self.snapshot.summary.to_string()
    }

    pub fn total_pages(&self) -> usize {
        self.snapshot.total_pages
    }

    pub fn page_number(&self) -> usize {
        self.snapshot.page_number
    }

    pub fn page_size(&self) -> usize {
        self.snapshot.page_size
    }

    /// Records in the effective source
    pub fn effective_count(&self) -> usize {
        self.state.effective_count()
    }

    /// Records in the full dataset
    pub fn total_rows(&self) -> usize {
        self.state.total_rows()
    }

    pub fn filter_active(&self) -> bool {
        self.state.filter_active()
    }

    pub fn has_records(&self) -> bool {
        self.snapshot.has_records
    }

    pub fn has_rendered_rows(&self) -> bool {
        self.snapshot.has_rendered_rows
    }

    pub fn has_header(&self) -> bool {
        self.config.has_header()
    }

    pub fn column_filter_options(&self) -> Vec<SelectOption> {
        self.config.column_filter_options()
    }

    pub fn page_length_options(&self) -> Vec<SelectOption> {
        self.config.page_length_options()
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the current view state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether a debounced search is waiting
    pub fn search_pending(&self) -> bool {
        self.pending_search.is_pending()
    }
}
