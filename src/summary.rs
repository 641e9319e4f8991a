//! Summary message
//!
//! "Showing {start} to {end} of {count} entries", with a
//! "(filtered from {total} total entries)" suffix while a search is active.

use std::fmt;

/// Inclusive 1-based record range of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub start: usize,
    pub end: usize,
    pub count: usize,
    /// Dataset size, present only when a filter is active
    pub filtered_from: Option<usize>,
}

impl Summary {
    /// Compute the summary for a page of the effective source
    ///
    /// `count` is the effective record count; `total_rows` the full dataset.
    pub fn compute(
        count: usize,
        page_number: usize,
        page_size: usize,
        filter_active: bool,
        total_rows: usize,
    ) -> Self {
        let range = crate::pagination::page_bounds(count, page_number, page_size);
        let (start, end) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };

        Self {
            start,
            end,
            count,
            filtered_from: filter_active.then_some(total_rows),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.start, self.end, self.count
        )?;
        if let Some(total) = self.filtered_from {
            write!(f, " (filtered from {total} total entries)")?;
        }
        Ok(())
    }
}
