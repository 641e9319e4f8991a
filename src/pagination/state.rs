//! Page state
//!
//! Current page number and page size, with clamping transitions.

use std::ops::Range;

/// Number of pages needed for `count` records
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Index range of page `number` over `count` records
///
/// Always within `0..count`; empty when the page lies past the end.
pub fn page_bounds(count: usize, number: usize, size: usize) -> Range<usize> {
    let first = number.saturating_sub(1).saturating_mul(size).min(count);
    let last = number.saturating_mul(size).min(count);
    first..last
}

/// Current page number (1-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    number: usize,
    size: usize,
}

impl PageState {
    /// Page 1 with the given size (at least 1)
    pub fn new(size: usize) -> Self {
        Self {
            number: 1,
            size: size.max(1),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Pages needed for `count` records at this size
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.size)
    }

    /// Index range of the current page over `count` records
    pub fn bounds(&self, count: usize) -> Range<usize> {
        page_bounds(count, self.number, self.size)
    }

    /// Clamp the page number into `1..=max(1, total_pages)`
    pub fn clamped(self, count: usize) -> Self {
        let last = self.total_pages(count).max(1);
        Self {
            number: self.number.clamp(1, last),
            ..self
        }
    }

    /// Back to page 1
    pub fn first(self) -> Self {
        Self { number: 1, ..self }
    }

    /// A specific page, clamped
    pub fn at(self, number: usize, count: usize) -> Self {
        Self { number, ..self }.clamped(count)
    }

    /// One page back, never below 1
    pub fn previous(self, count: usize) -> Self {
        self.at(self.number.saturating_sub(1), count)
    }

    /// One page forward, never past the last page
    pub fn next(self, count: usize) -> Self {
        self.at(self.number.saturating_add(1), count)
    }

    /// A new page size; always returns to page 1
    pub fn resized(self, size: usize) -> Self {
        Self::new(size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(crate::config::FALLBACK_PAGE_SIZE)
    }
}
