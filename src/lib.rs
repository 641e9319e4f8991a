//! # tableview
//!
//! A client-side tabular view engine with:
//! - Case-insensitive search over all fields or one column
//! - Pagination with a compact page-control sequence
//! - Column sorting, per page or across the whole source
//! - Debounced search input
//! - A summary line ("Showing 1 to 10 of 57 entries")
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Renderer / Caller (external)                 │
//! │        input events ▼                 ▲ snapshot             │
//! └─────────────────────┬─────────────────┴─────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │           (ViewState + pending debounced search)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────┬─────────────┐
//!          ▼            ▼            ▼             ▼
//!   ┌────────────┐ ┌─────────┐ ┌────────────┐ ┌─────────┐
//!   │  Dataset   │ │ Filter  │ │ Pagination │ │  Sort   │
//!   │  (Arc'd)   │ │(indices)│ │  (tokens)  │ │(stable) │
//!   └────────────┘ └─────────┘ └────────────┘ └─────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod dataset;
pub mod filter;
pub mod sort;
pub mod pagination;
pub mod summary;
pub mod view;
pub mod debounce;
pub mod event;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ViewError};
pub use config::{Column, Config, SortScope};
pub use engine::Engine;
pub use record::{Record, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tableview
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
