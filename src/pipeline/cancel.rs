//! Shared cancellation signal: first reason wins, every waiter wakes.

use crossbeam_channel::{Receiver, Sender, bounded};
use log::debug;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::SumError;

/// Cooperative cancellation for one pipeline run.
///
/// `done()` is a channel that never carries a message; it disconnects when the
/// signal is first set, so it can sit in any `select!` next to a queue operation.
#[derive(Clone)]
pub struct CancelSignal {
    inner: Arc<CancelInner>,
}

struct CancelInner {
    reason: OnceLock<SumError>,
    trigger: Mutex<Option<Sender<()>>>,
    done: Receiver<()>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (trigger, done) = bounded(0);
        Self {
            inner: Arc::new(CancelInner {
                reason: OnceLock::new(),
                trigger: Mutex::new(Some(trigger)),
                done,
            }),
        }
    }

    /// Set the signal with `reason`. Returns true only for the first caller; later reasons are dropped.
    pub fn cancel(&self, reason: SumError) -> bool {
        let first = self.inner.reason.set(reason).is_ok();
        if first && let Some(reason) = self.inner.reason.get() {
            debug!("cancelling run: {}", reason);
        }
        let mut trigger = self
            .inner
            .trigger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        drop(trigger.take());
        first
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.reason.get().is_some()
    }

    /// The error that cancelled the run, if any.
    pub fn reason(&self) -> Option<&SumError> {
        self.inner.reason.get()
    }

    /// Becomes ready (disconnected) once the signal is set.
    pub fn done(&self) -> &Receiver<()> {
        &self.inner.done
    }
}

/// Cancels the run with [`SumError::Panicked`] if dropped while its thread unwinds.
/// Hold one for the life of a stage so a panic stops the other stages before anyone joins it.
pub struct PanicGuard<'a> {
    cancel: &'a CancelSignal,
    stage: &'static str,
}

impl<'a> PanicGuard<'a> {
    pub fn new(cancel: &'a CancelSignal, stage: &'static str) -> Self {
        Self { cancel, stage }
    }
}

impl Drop for PanicGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.cancel.cancel(SumError::Panicked(self.stage));
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}
