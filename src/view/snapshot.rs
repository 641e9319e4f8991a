//! Rendered view outputs

use crate::config::{Config, SortScope};
use crate::pagination::{compact_tokens, PaginationToken};
use crate::record::Record;
use crate::sort::{sort_indices, sort_records, SortState};
use crate::summary::Summary;

use super::ViewState;

/// Everything a renderer reads after an operation
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// The view window: records to paint, in display order
    pub records: Vec<Record>,

    /// Page controls, empty when pagination is not shown
    pub tokens: Vec<PaginationToken>,

    pub summary: Summary,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,

    /// Sort to indicate on the column header
    pub sort: Option<SortState>,

    /// Whether the dataset holds any record at all
    pub has_records: bool,

    /// Whether the window holds any record
    pub has_rendered_rows: bool,
}

impl ViewSnapshot {
    /// Derive the outputs of `state`
    pub fn render(state: &ViewState, config: &Config) -> Self {
        let page = state.page();
        let count = state.effective_count();
        let total_pages = state.total_pages();

        let mut positions = state.effective_positions();
        if let (SortScope::Source, Some(sort)) = (state.sort_scope(), state.sort()) {
            sort_indices(state.dataset(), &mut positions, sort);
        }

        let window = if config.is_paged() {
            &positions[page.bounds(count)]
        } else {
            &positions[..]
        };

        let mut records: Vec<Record> = window
            .iter()
            .filter_map(|&position| state.dataset().get(position).cloned())
            .collect();

        if let (SortScope::Page, Some(sort)) = (state.sort_scope(), state.sort()) {
            sort_records(&mut records, sort);
        }

        let tokens = if config.show_pagination {
            compact_tokens(total_pages, page.number(), config.pagination_step)
        } else {
            Vec::new()
        };

        // Unpaged windows show the whole source as one page
        let (summary_page, summary_size) = if config.is_paged() {
            (page.number(), page.size())
        } else {
            (1, count.max(1))
        };
        let summary = Summary::compute(
            count,
            summary_page,
            summary_size,
            state.filter_active(),
            state.total_rows(),
        );

        Self {
            has_records: !state.dataset().is_empty(),
            has_rendered_rows: !records.is_empty(),
            records,
            tokens,
            summary,
            page_number: page.number(),
            page_size: page.size(),
            total_pages,
            sort: state.sort().cloned(),
        }
    }

    /// The active page token, if controls are shown
    pub fn active_token(&self) -> Option<&PaginationToken> {
        self.tokens.iter().find(|t| t.is_active())
    }
}
