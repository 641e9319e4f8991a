//! Cancellable delayed value

use std::time::{Duration, Instant};

/// Identifies one scheduled value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    /// `None` when `now + delay` is not representable; released only by `flush`
    due: Option<Instant>,
    handle: DebounceHandle,
}

/// At most one pending value, released once its quiet period has passed
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    next_handle: u64,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` for `now + delay`, cancelling any pending value
    pub fn schedule(&mut self, value: T, now: Instant) -> DebounceHandle {
        let handle = DebounceHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);

        if self.pending.is_some() {
            tracing::trace!("Debounce: cancelling pending value");
        }
        self.pending = Some(Pending {
            value,
            due: now.checked_add(self.delay),
            handle,
        });
        handle
    }

    /// Cancel the pending value if `handle` still refers to it
    pub fn cancel(&mut self, handle: DebounceHandle) -> bool {
        if self.pending.as_ref().is_some_and(|p| p.handle == handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop whatever is pending
    pub fn cancel_all(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().and_then(|p| p.due)
    }

    /// Release the pending value if its quiet period is over at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.due_at().is_some_and(|due| now >= due) {
            self.flush()
        } else {
            None
        }
    }

    /// Release the pending value immediately
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
