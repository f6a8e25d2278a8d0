//! Virtual time for the event pipeline
//!
//! Raw events are stamped with a [`Timestamp`] by whoever feeds the widget.
//! The pipeline never reads a wall clock, so replaying the same timed events
//! always produces the same states.

use std::fmt;

/// Milliseconds since the owning widget was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Timestamp `ms` milliseconds later, saturating at the end of time
    pub const fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds from `self` until `later` (zero if `later` is not later)
    pub const fn until(self, later: Timestamp) -> u64 {
        later.0.saturating_sub(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A value paired with the instant it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timed<T> {
    pub at: Timestamp,
    pub value: T,
}

impl<T> Timed<T> {
    pub fn new(at: Timestamp, value: T) -> Self {
        Self { at, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            at: self.at,
            value: f(self.value),
        }
    }
}

/// Identity of the element an interaction event originated from
///
/// Only equality matters: a mouse-down and a mouse-up form a click when
/// both carry the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub u64);
