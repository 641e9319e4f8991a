//! Configuration for tableview
//!
//! Column metadata, page-size options and UI flags, with sensible defaults.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};
use crate::filter::ALL_FIELDS;

/// Page size used when no options are configured
pub const FALLBACK_PAGE_SIZE: usize = 10;

/// A visible column: header label plus the record field it shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub field: String,
}

impl Column {
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            field: field.into(),
        }
    }
}

/// A label/value pair offered by a selector (filter column, page length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Which records a column sort reorders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortScope {
    /// Only the visible page; dropped whenever the page changes
    #[default]
    Page,

    /// The whole effective source, before slicing; survives navigation
    Source,
}

/// Main configuration for a view
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Schema
    // -------------------------------------------------------------------------
    /// Field that identifies a record
    pub key_field: String,

    /// Visible columns, in display order
    pub columns: Vec<Column>,

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------
    /// Page sizes offered to the user; the first one is the default
    pub page_size_options: Vec<usize>,

    /// Half-width of the page window around the current page
    pub pagination_step: usize,

    // -------------------------------------------------------------------------
    // UI Flags
    // -------------------------------------------------------------------------
    pub searchable: bool,
    pub show_page_entries: bool,
    pub show_filter_column: bool,
    pub show_pagination: bool,

    // -------------------------------------------------------------------------
    // Behaviour
    // -------------------------------------------------------------------------
    /// Quiet period before a typed search is applied
    pub search_delay: Duration,

    /// Whether sorting reorders the page or the whole source
    pub sort_scope: SortScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_field: "id".to_string(),
            columns: Vec::new(),
            page_size_options: vec![10, 25, 50, 100],
            pagination_step: 3,
            searchable: false,
            show_page_entries: false,
            show_filter_column: false,
            show_pagination: false,
            search_delay: Duration::from_millis(300),
            sort_scope: SortScope::Page,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings no view can work with
    pub fn validate(&self) -> Result<()> {
        if self.key_field.trim().is_empty() {
            return Err(ViewError::Config("key field must not be empty".to_string()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ViewError::Config(
                "page size options must be positive".to_string(),
            ));
        }
        if self.pagination_step == 0 {
            return Err(ViewError::Config(
                "pagination step must be positive".to_string(),
            ));
        }
        if self
            .pagination_step
            .checked_mul(2)
            .and_then(|width| width.checked_add(6))
            .is_none()
        {
            return Err(ViewError::Config(format!(
                "pagination step {} is too large",
                self.pagination_step
            )));
        }
        if Instant::now().checked_add(self.search_delay).is_none() {
            return Err(ViewError::Config(format!(
                "search delay {:?} is too large",
                self.search_delay
            )));
        }
        Ok(())
    }

    /// Initial page size: the first configured option
    pub fn default_page_size(&self) -> usize {
        self.page_size_options
            .first()
            .copied()
            .unwrap_or(FALLBACK_PAGE_SIZE)
    }

    /// Whether the view window is sliced into pages at all
    pub fn is_paged(&self) -> bool {
        self.show_page_entries || self.show_pagination
    }

    /// Whether a header bar (search, page length, filter column) is shown
    pub fn has_header(&self) -> bool {
        self.searchable || self.show_page_entries || self.show_filter_column
    }

    /// Whether `field` is one of the configured columns
    pub fn has_column(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c.field == field)
    }

    /// Filter-column choices: a synthetic "All" entry followed by the columns
    pub fn column_filter_options(&self) -> Vec<SelectOption> {
        let mut options = Vec::with_capacity(self.columns.len() + 1);
        options.push(SelectOption {
            label: "All".to_string(),
            value: ALL_FIELDS.to_string(),
        });
        options.extend(self.columns.iter().map(|c| SelectOption {
            label: c.label.clone(),
            value: c.field.clone(),
        }));
        options
    }

    /// Page-length choices, as strings
    pub fn page_length_options(&self) -> Vec<SelectOption> {
        self.page_size_options
            .iter()
            .map(|size| SelectOption {
                label: size.to_string(),
                value: size.to_string(),
            })
            .collect()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the record key field
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.config.key_field = field.into();
        self
    }

    /// Set the visible columns
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.config.columns = columns;
        self
    }

    /// Append one visible column
    pub fn column(mut self, label: impl Into<String>, field: impl Into<String>) -> Self {
        self.config.columns.push(Column::new(label, field));
        self
    }

    /// Set the page size options (first is the default)
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.config.page_size_options = options;
        self
    }

    /// Set the half-width of the pagination window
    pub fn pagination_step(mut self, step: usize) -> Self {
        self.config.pagination_step = step;
        self
    }

    pub fn searchable(mut self, enabled: bool) -> Self {
        self.config.searchable = enabled;
        self
    }

    pub fn show_page_entries(mut self, enabled: bool) -> Self {
        self.config.show_page_entries = enabled;
        self
    }

    pub fn show_filter_column(mut self, enabled: bool) -> Self {
        self.config.show_filter_column = enabled;
        self
    }

    pub fn show_pagination(mut self, enabled: bool) -> Self {
        self.config.show_pagination = enabled;
        self
    }

    /// Set the search debounce quiet period
    pub fn search_delay(mut self, delay: Duration) -> Self {
        self.config.search_delay = delay;
        self
    }

    /// Set whether sorting applies to the page or the whole source
    pub fn sort_scope(mut self, scope: SortScope) -> Self {
        self.config.sort_scope = scope;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
