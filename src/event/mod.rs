//! Event Module
//!
//! The input vocabulary a renderer sends to an engine, plus a line-oriented
//! text form of it.
//!
//! ## Text Form
//! ```text
//!   search <text>        raw search input (debounced)
//!   field <name|all>     filter column
//!   size <n>             page size
//!   page <n>             go to page
//!   next | prev          step one page
//!   sort <field> [dir]   sort, dir = asc (default) | desc
//!   clear                clear the search
//!   show                 print the current view
//!   quit | exit          leave
//! ```

mod command;
mod parse;

pub use command::{Event, EventKind};
pub use parse::{parse_request, Request};
