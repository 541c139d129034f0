//! Outcome observers.
//!
//! Replies arrive asynchronously relative to the call that built the request,
//! so outcomes are pushed to an observer instead of being returned.

use std::sync::{Mutex, PoisonError};

use tokio::sync::mpsc;

use crate::operation::Outcome;

/// Receives the outcomes of one operation.
pub trait Observer<T>: Send + Sync {
    fn on_outcome(&self, outcome: Outcome<T>);
}

impl<T: Send> Observer<T> for mpsc::UnboundedSender<Outcome<T>> {
    fn on_outcome(&self, outcome: Outcome<T>) {
        if let Err(e) = self.send(outcome) {
            tracing::debug!(kind = e.0.kind(), "observer channel closed; outcome dropped");
        }
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F>(pub F);

impl<T, F> Observer<T> for FnObserver<F>
where
    F: Fn(Outcome<T>) + Send + Sync,
{
    fn on_outcome(&self, outcome: Outcome<T>) {
        (self.0)(outcome)
    }
}

/// Buffers outcomes in arrival order.
#[derive(Debug)]
pub struct Collector<T> {
    outcomes: Mutex<Vec<Outcome<T>>>,
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Collector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Outcome<T>> {
        let mut guard = self.outcomes.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }
}

impl<T: Send> Observer<T> for Collector<T> {
    fn on_outcome(&self, outcome: Outcome<T>) {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome);
    }
}
