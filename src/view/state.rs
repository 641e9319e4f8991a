//! View state and its transitions

use std::sync::Arc;

use crate::config::SortScope;
use crate::dataset::Dataset;
use crate::filter::{filter_indices, FieldSelector, SearchTerm};
use crate::pagination::PageState;
use crate::record::Record;
use crate::sort::{SortDirection, SortState};

/// A search currently narrowing the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    pub selector: FieldSelector,
    pub term: SearchTerm,
    /// Dataset positions of the matching records, in dataset order
    pub matches: Arc<[usize]>,
}

/// Immutable inputs of a view
#[derive(Debug, Clone)]
pub struct ViewState {
    dataset: Dataset,
    selector: FieldSelector,
    filter: Option<ActiveFilter>,
    page: PageState,
    sort: Option<SortState>,
    sort_scope: SortScope,
}

impl ViewState {
    /// An empty view on page 1
    pub fn new(page_size: usize, sort_scope: SortScope) -> Self {
        Self {
            dataset: Dataset::default(),
            selector: FieldSelector::All,
            filter: None,
            page: PageState::new(page_size),
            sort: None,
            sort_scope,
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Replace the dataset; any filter is dropped and the page re-clamped
    pub fn with_records(self, records: Vec<Record>) -> Self {
        self.with_dataset(Dataset::new(records))
    }

    /// Replace the dataset with an already shared one
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        tracing::debug!("Dataset assigned: {} records", dataset.len());
        self.dataset = dataset;
        self.filter = None;
        self.page = self.page.clamped(self.effective_count());
        self.drop_page_sort()
    }

    /// Recompute the filtered set for `term` under `selector`; back to page 1
    pub fn with_filter(mut self, selector: FieldSelector, term: SearchTerm) -> Self {
        let matches: Arc<[usize]> = filter_indices(&self.dataset, &selector, &term).into();
        tracing::debug!(
            "Filter applied: field={} term={:?} matches={}/{}",
            selector,
            term.as_str(),
            matches.len(),
            self.dataset.len()
        );
        self.selector = selector.clone();
        self.filter = Some(ActiveFilter {
            selector,
            term,
            matches,
        });
        self.page = self.page.first();
        self.drop_page_sort()
    }

    /// Drop the active filter; back to page 1
    pub fn cleared_filter(mut self) -> Self {
        if self.filter.take().is_some() {
            tracing::debug!("Filter cleared");
        }
        self.page = self.page.first();
        self.drop_page_sort()
    }

    /// Change the searched field, re-running an active search against it
    pub fn with_selector(mut self, selector: FieldSelector) -> Self {
        match self.filter.take() {
            Some(active) => self.with_filter(selector, active.term),
            None => {
                self.selector = selector;
                self.page = self.page.first();
                self.drop_page_sort()
            }
        }
    }

    /// Change the page size; back to page 1. A zero size is ignored.
    pub fn with_page_size(mut self, size: usize) -> Self {
        if size == 0 {
            tracing::warn!("Ignoring page size of 0");
            return self;
        }
        tracing::debug!("Page size set to {}", size);
        self.page = self.page.resized(size);
        self.drop_page_sort()
    }

    /// Jump to page `number`, clamped into range
    pub fn at_page(self, number: usize) -> Self {
        let total = self.total_pages();
        if number == 0 || number > total.max(1) {
            tracing::warn!("Page {} out of range 1..={}, clamping", number, total.max(1));
        }
        let page = self.page.at(number, self.effective_count());
        self.navigated(page)
    }

    /// One page back; no-op while nothing is visible
    pub fn previous_page(self) -> Self {
        if self.effective_count() == 0 {
            return self;
        }
        let page = self.page.previous(self.effective_count());
        self.navigated(page)
    }

    /// One page forward; no-op while nothing is visible
    pub fn next_page(self) -> Self {
        if self.effective_count() == 0 {
            return self;
        }
        let page = self.page.next(self.effective_count());
        self.navigated(page)
    }

    /// Sort by `field` in `direction`
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let sort = SortState::new(field, direction);
        tracing::debug!("Sorted by {} {}", sort.field, sort.direction);
        self.sort = Some(sort);
        self
    }

    /// Remove any sort
    pub fn without_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    fn navigated(mut self, page: PageState) -> Self {
        if page == self.page {
            return self;
        }
        tracing::debug!("Page {} -> {}", self.page.number(), page.number());
        self.page = page;
        self.drop_page_sort()
    }

    /// A page-scoped sort only ever applies to the page it was requested on
    fn drop_page_sort(mut self) -> Self {
        if self.sort_scope == SortScope::Page {
            self.sort = None;
        }
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The field selection for searches
    pub fn selector(&self) -> &FieldSelector {
        &self.selector
    }

    pub fn filter(&self) -> Option<&ActiveFilter> {
        self.filter.as_ref()
    }

    pub fn filter_active(&self) -> bool {
        self.filter.is_some()
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn sort_scope(&self) -> SortScope {
        self.sort_scope
    }

    /// Rows in the full dataset
    pub fn total_rows(&self) -> usize {
        self.dataset.len()
    }

    /// Rows in the effective source: the filtered set while a search is active
    pub fn effective_count(&self) -> usize {
        match &self.filter {
            Some(active) => active.matches.len(),
            None => self.dataset.len(),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.effective_count())
    }

    /// Dataset positions of the effective source, in source order
    pub fn effective_positions(&self) -> Vec<usize> {
        match &self.filter {
            Some(active) => active.matches.to_vec(),
            None => (0..self.dataset.len()).collect(),
        }
    }
}
