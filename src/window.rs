//! Time-window combinators
//!
//! A window opens on each event of a `first` sequence and closes on the next
//! event of a `second` sequence. [`Between`] forwards source events only while
//! a window is open; [`NotBetween`] forwards them only while no window is open.
//!
//! ```text
//! source: --a--b----c----d---e-f--g----h---i--j-----
//! first:  -------F------------------F---------------
//! second: -----------------S-----------------S------
//! between:----------c----d-------------h---i--------
//! notBetw:--a--b-------------e-f--g-----------j-----
//! ```
//!
//! Gates never buffer: a source event is either forwarded as it arrives or
//! dropped. The only state is whether a window is currently open.

use crate::timeline::{Timed, Timestamp};

/// Open/closed flag shared by both gate flavours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    open: bool,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second `first` while already open keeps the same window open
    pub fn open(&mut self) {
        self.open = true;
    }

    /// A `second` with no open window is ignored
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// A source gate driven by two boundary sequences
pub trait Gate {
    /// A `first` boundary event arrived
    fn on_first(&mut self);

    /// A `second` boundary event arrived
    fn on_second(&mut self);

    /// Whether a source event arriving now is forwarded
    fn passes(&self) -> bool;

    fn gate<T>(&self, value: T) -> Option<T> {
        self.passes().then_some(value)
    }
}

/// Forwards source events only inside a `first`..`second` window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Between {
    window: Window,
}

impl Between {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

impl Gate for Between {
    fn on_first(&mut self) {
        self.window.open();
    }

    fn on_second(&mut self) {
        self.window.close();
    }

    fn passes(&self) -> bool {
        self.window.is_open()
    }
}

/// Forwards source events only outside every `first`..`second` window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotBetween {
    window: Window,
}

impl NotBetween {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Gate for NotBetween {
    fn on_first(&mut self) {
        self.window.open();
    }

    fn on_second(&mut self) {
        self.window.close();
    }

    fn passes(&self) -> bool {
        !self.window.is_open()
    }
}

enum Mark<'a, T> {
    First,
    Second,
    Source(&'a Timed<T>),
}

/// Run a gate over already-recorded sequences
///
/// Events are replayed in timestamp order. On equal timestamps `first`
/// boundaries apply before `second` boundaries, and both before source
/// events; events of the same kind keep their input order.
pub fn apply_gate<G, T, A, B>(
    mut gate: G,
    source: &[Timed<T>],
    first: &[Timed<A>],
    second: &[Timed<B>],
) -> Vec<Timed<T>>
where
    G: Gate,
    T: Clone,
{
    let mut marks: Vec<(Timestamp, u8, Mark<'_, T>)> =
        Vec::with_capacity(source.len() + first.len() + second.len());
    marks.extend(first.iter().map(|e| (e.at, 0, Mark::First)));
    marks.extend(second.iter().map(|e| (e.at, 1, Mark::Second)));
    marks.extend(source.iter().map(|e| (e.at, 2, Mark::Source(e))));
    marks.sort_by_key(|(at, rank, _)| (*at, *rank));

    let mut out = Vec::new();
    for (_, _, mark) in marks {
        match mark {
            Mark::First => gate.on_first(),
            Mark::Second => gate.on_second(),
            Mark::Source(event) => {
                if let Some(event) = gate.gate(event) {
                    out.push(event.clone());
                }
            }
        }
    }
    out
}

/// `source` restricted to the windows opened by `first` and closed by `second`
pub fn between<T: Clone, A, B>(
    source: &[Timed<T>],
    first: &[Timed<A>],
    second: &[Timed<B>],
) -> Vec<Timed<T>> {
    apply_gate(Between::new(), source, first, second)
}

/// `source` with every `first`..`second` window cut out
pub fn not_between<T: Clone, A, B>(
    source: &[Timed<T>],
    first: &[Timed<A>],
    second: &[Timed<B>],
) -> Vec<Timed<T>> {
    apply_gate(NotBetween::new(), source, first, second)
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod window_tests;
