//! Debounce Module
//!
//! Coalesces bursts of search keystrokes into one settled search.
//!
//! ## Model
//! - Each keystroke schedules its term at `now + delay`
//! - Scheduling cancels whatever was pending (cancel-and-reschedule)
//! - Only a term that survives its quiet period is released
//!
//! `Debouncer` is the deterministic core: the caller supplies the clock.
//! `DebounceWorker` drives the same core on a background thread and hands
//! settled terms back over a channel.

mod timer;
mod worker;

pub use timer::{DebounceHandle, Debouncer};
pub use worker::DebounceWorker;
