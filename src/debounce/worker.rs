//! Background debouncer
//!
//! Raw search text goes in through `push`; settled text comes out of
//! `settled()`. The view itself stays on the caller's thread.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};

use crate::error::Result;

use super::Debouncer;

/// Debounces text on a dedicated thread
pub struct DebounceWorker {
    input: Option<Sender<String>>,
    output: Receiver<String>,
    thread: Option<JoinHandle<()>>,
}

impl DebounceWorker {
    /// Start the worker thread
    pub fn spawn(delay: Duration) -> Result<Self> {
        let (input_tx, input_rx) = channel::unbounded::<String>();
        let (output_tx, output_rx) = channel::unbounded::<String>();

        let thread = thread::Builder::new()
            .name("tableview-debounce".to_string())
            .spawn(move || run(delay, input_rx, output_tx))?;

        Ok(Self {
            input: Some(input_tx),
            output: output_rx,
            thread: Some(thread),
        })
    }

    /// Feed one keystroke's worth of search text
    pub fn push(&self, raw: impl Into<String>) {
        if let Some(input) = &self.input {
            if input.send(raw.into()).is_err() {
                tracing::warn!("Debounce worker has stopped; dropping input");
            }
        }
    }

    /// Channel of settled search text
    pub fn settled(&self) -> &Receiver<String> {
        &self.output
    }

    /// A settled term, if one is ready
    pub fn try_settled(&self) -> Option<String> {
        self.output.try_recv().ok()
    }

    /// Stop the worker; a still-pending term is released first
    pub fn shutdown(mut self) -> Vec<String> {
        self.stop();
        self.output.try_iter().collect()
    }

    fn stop(&mut self) {
        self.input.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Debounce worker panicked");
            }
        }
    }
}

impl Drop for DebounceWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(delay: Duration, input: Receiver<String>, output: Sender<String>) {
    let mut debouncer = Debouncer::new(delay);

    loop {
        let received = match debouncer.due_at() {
            Some(due) => input.recv_timeout(due.saturating_duration_since(Instant::now())),
            None => input.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(raw) => {
                debouncer.schedule(raw, Instant::now());
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(term) = debouncer.poll(Instant::now()) {
                    if output.send(term).is_err() {
                        break;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(term) = debouncer.flush() {
                    let _ = output.send(term);
                }
                break;
            }
        }
    }
}
