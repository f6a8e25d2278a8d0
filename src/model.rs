//! Model orchestration
//!
//! Two folds run side by side:
//!
//! 1. The per-batch fold. Each suggestion batch (or an empty substitute while
//!    suggestions are unwanted) seeds a fresh [`WidgetState`]; reducers are
//!    then applied to it one at a time, each producing an emitted state.
//! 2. The [`SelectionList`] fold. It sees every emitted state and maintains
//!    the committed selections across all batches. It is never reseeded.
//!
//! The externally visible state is the per-batch state paired with the
//! current list.

use crate::reducer::Reducer;
use crate::state::WidgetState;

/// Accumulated committed selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    entries: Vec<String>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Fold one emitted state into the list
    ///
    /// A pending delete is applied first, against the list as it stood
    /// before this step; an out-of-range key is ignored. A committed
    /// selection is appended afterwards.
    pub fn fold(&mut self, state: &WidgetState) {
        if let Some(key) = state.pending_delete_key {
            if key < self.entries.len() {
                let removed = self.entries.remove(key);
                log::debug!("removed selection {} ({:?})", key, removed);
            } else {
                log::debug!(
                    "ignoring delete of {} from list of {}",
                    key,
                    self.entries.len()
                );
            }
        }

        if let Some(selected) = &state.selected {
            self.entries.push(selected.clone());
        }
    }
}

/// Owner of the current state
#[derive(Debug, Clone)]
pub struct Model {
    wants_suggestions: bool,
    /// Per-batch fold accumulator
    current: WidgetState,
    list: SelectionList,
    /// Last externally visible state
    emitted: WidgetState,
}

impl Model {
    /// Model seeded with an empty suggestion list
    pub fn new() -> Self {
        let seed = WidgetState::default();
        Self {
            wants_suggestions: false,
            current: seed.clone(),
            list: SelectionList::new(),
            emitted: seed,
        }
    }

    pub fn wants_suggestions(&self) -> bool {
        self.wants_suggestions
    }

    /// Gate later batches; takes effect on the next batch, emits nothing
    pub fn set_wants_suggestions(&mut self, wants: bool) {
        self.wants_suggestions = wants;
    }

    /// Latest externally visible state
    pub fn state(&self) -> &WidgetState {
        &self.emitted
    }

    /// Seed a fresh state from an arrived batch and emit it
    ///
    /// Batches arriving while suggestions are unwanted are replaced by an
    /// empty one, which still resets highlight and selection.
    pub fn receive_batch(&mut self, suggestions: Vec<String>) -> WidgetState {
        let suggestions = if self.wants_suggestions {
            suggestions
        } else {
            if !suggestions.is_empty() {
                log::debug!("discarding {} suggestions while unfocused", suggestions.len());
            }
            Vec::new()
        };
        self.step(WidgetState::seeded(suggestions))
    }

    /// Apply one reducer to the current state and emit the result
    pub fn apply(&mut self, reducer: &Reducer) -> WidgetState {
        let next = reducer.apply(&self.current);
        self.step(next)
    }

    fn step(&mut self, next: WidgetState) -> WidgetState {
        self.list.fold(&next);

        // The delete key is single-use: later reducers start without it
        self.current = next.with_pending_delete_key(None);
        self.emitted = self
            .current
            .with_selected_list(self.list.entries().to_vec());
        log::trace!("emit {:?}", self.emitted);
        self.emitted.clone()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
