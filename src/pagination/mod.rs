//! Pagination Module
//!
//! The Pagination Engine: page arithmetic, window slicing and the compact
//! page-control sequence.
//!
//! ## Page Arithmetic
//! ```text
//!   total_pages = ceil(count / size)            (0 when count == 0)
//!   first       = (number - 1) * size
//!   last        = min(number * size, count)
//!   window      = source[first..last]
//! ```
//!
//! ## Compact Controls (step W)
//! ```text
//!   total < 2W+6        ◄ 1 2 3 4 ►
//!   number < 2W+1       ◄ 1 .. 2W+3 … last ►
//!   number > total-2W   ◄ 1 … total-2W-2 .. total ►
//!   otherwise           ◄ 1 … number-W .. number+W … last ►
//! ```

mod state;
mod tokens;

pub use state::{page_bounds, total_pages, PageState};
pub use tokens::{compact_tokens, PaginationToken};
