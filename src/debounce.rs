//! Quiescence debouncer
//!
//! Holds the latest pushed value until `period_ms` elapses with no further
//! push. Each push restarts the timer and replaces the held value; the
//! superseded value is dropped silently.

use crate::timeline::Timestamp;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    period_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Timestamp,
}

impl<T> Debouncer<T> {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            pending: None,
        }
    }

    /// Hold `value`, firing at `at + period` unless pushed again before then
    pub fn push(&mut self, at: Timestamp, value: T) {
        self.pending = Some(Pending {
            value,
            deadline: at.after(self.period_ms),
        });
    }

    /// Release the held value if its deadline has been reached
    pub fn poll(&mut self, now: Timestamp) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// When the held value will fire, if any
    pub fn deadline(&self) -> Option<Timestamp> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
