//! View Module
//!
//! The derivation pipeline as plain values.
//!
//! ## Flow
//! ```text
//!   Dataset ──► filter (optional) ──► paginate ──► sort ──► ViewSnapshot
//!                                        ▲
//!                          (SortScope::Source sorts before paginating)
//! ```
//!
//! `ViewState` is an immutable snapshot of the inputs (records, filter,
//! page, sort). Every transition consumes a state and returns the next one.
//! `ViewSnapshot` is everything a renderer reads, computed from a state and
//! a `Config`.

mod snapshot;
mod state;

pub use snapshot::ViewSnapshot;
pub use state::{ActiveFilter, ViewState};
