//! Page-control tokens
//!
//! Regenerated on demand from the total page count and current page.

use std::fmt;

/// One page-control unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationToken {
    /// Step back one page
    Previous,

    /// A page number; `active` marks the current page
    Page { number: usize, active: bool },

    /// Elided run of pages (not clickable)
    Ellipsis,

    /// Step forward one page
    Next,
}

impl PaginationToken {
    /// The page number, for page tokens
    pub fn page_number(&self) -> Option<usize> {
        match self {
            PaginationToken::Page { number, .. } => Some(*number),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PaginationToken::Page { active: true, .. })
    }

    /// Ellipses are the only tokens that do nothing when activated
    pub fn is_clickable(&self) -> bool {
        !matches!(self, PaginationToken::Ellipsis)
    }
}

impl fmt::Display for PaginationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationToken::Previous => f.write_str("◄"),
            PaginationToken::Next => f.write_str("►"),
            PaginationToken::Ellipsis => f.write_str("..."),
            PaginationToken::Page { number, .. } => write!(f, "{number}"),
        }
    }
}

/// Build the compact control sequence for `current` of `total_pages`
///
/// `step` is the half-width of the window around the current page.
pub fn compact_tokens(total_pages: usize, current: usize, step: usize) -> Vec<PaginationToken> {
    let page = |number: usize| PaginationToken::Page {
        number,
        active: number == current,
    };

    // A step too wide for usize lists every page
    let width = step.saturating_mul(2);
    let mut tokens = vec![PaginationToken::Previous];

    if total_pages < width.saturating_add(6) {
        tokens.extend((1..=total_pages).map(page));
    } else if current < width + 1 {
        tokens.extend((1..=width + 3).map(page));
        tokens.push(PaginationToken::Ellipsis);
        tokens.push(page(total_pages));
    } else if current > total_pages - width {
        tokens.push(page(1));
        tokens.push(PaginationToken::Ellipsis);
        tokens.extend((total_pages - width - 2..=total_pages).map(page));
    } else {
        tokens.push(page(1));
        tokens.push(PaginationToken::Ellipsis);
        tokens.extend((current - step..=current + step).map(page));
        tokens.push(PaginationToken::Ellipsis);
        tokens.push(page(total_pages));
    }

    tokens.push(PaginationToken::Next);
    tokens
}
