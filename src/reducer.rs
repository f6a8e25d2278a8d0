//! State transitions
//!
//! Every intent that changes state maps to one or more [`Reducer`]s. A
//! reducer is a plain value describing a pure `WidgetState -> WidgetState`
//! function, so the model can apply them strictly in arrival order and tests
//! can apply them directly.

use crate::intent::Intent;
use crate::state::WidgetState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reducer {
    /// Move the highlight by a delta, wrapping around
    MoveHighlight(isize),
    /// Highlight an explicit index
    SetHighlight(usize),
    /// Commit the highlighted suggestion and close the menu
    SelectHighlighted,
    /// Settle `selected` back to none after a commit
    Deselect,
    /// Close the menu
    Hide,
    /// Mark a list entry for deletion
    WantDelete(Option<usize>),
}

impl Reducer {
    pub fn apply(&self, state: &WidgetState) -> WidgetState {
        match self {
            Reducer::MoveHighlight(delta) => move_highlight(state, *delta),
            Reducer::SetHighlight(index) => set_highlight(state, *index),
            Reducer::SelectHighlighted => select_highlighted(state),
            Reducer::Deselect => deselect(state),
            Reducer::Hide => hide(state),
            Reducer::WantDelete(key) => want_delete(state, *key),
        }
    }

    /// Reducers an intent expands to, in application order
    ///
    /// A commit is a select immediately followed by a deselect, so the list
    /// fold observes the committed value exactly once and the state settles
    /// back to "no selection". Intents that only steer the pipeline (search,
    /// focus retention, wanting suggestions) produce none.
    pub fn for_intent(intent: &Intent) -> Vec<Reducer> {
        match intent {
            Intent::MoveHighlight(delta) => vec![Reducer::MoveHighlight(*delta)],
            Intent::SetHighlight(index) => vec![Reducer::SetHighlight(*index)],
            Intent::SelectHighlighted => vec![Reducer::SelectHighlighted, Reducer::Deselect],
            Intent::QuitAutocomplete => vec![Reducer::Hide],
            Intent::WantDeleted(key) => vec![Reducer::WantDelete(*key)],
            Intent::Search(_) | Intent::KeepFocusOnInput(_) | Intent::WantsSuggestions(_) => {
                Vec::new()
            }
        }
    }
}

/// `x` wrapped into `0..len`; `len` must be non-zero
fn wrap_around(x: isize, len: usize) -> usize {
    x.rem_euclid(len as isize) as usize
}

/// Move the highlight by `delta`
///
/// With no highlight, moving down lands on the first suggestion and moving
/// up on the last. An existing highlight advances modulo the suggestion
/// count in both directions, which also pulls a stale out-of-range index
/// back into range. No-op when there are no suggestions.
pub fn move_highlight(state: &WidgetState, delta: isize) -> WidgetState {
    let len = state.suggestions.len();
    if len == 0 {
        return state.clone();
    }

    let next = match state.highlighted {
        None => wrap_around(delta.min(0), len),
        Some(current) => {
            let current = (current % len) as isize;
            wrap_around(current + delta % len as isize, len)
        }
    };
    state.with_highlighted(Some(next))
}

pub fn set_highlight(state: &WidgetState, index: usize) -> WidgetState {
    state.with_highlighted(Some(index))
}

/// Commit phase of a selection
///
/// Takes the highlighted suggestion into `selected` and closes the menu. A
/// missing or out-of-range highlight, or an empty menu, commits nothing.
pub fn select_highlighted(state: &WidgetState) -> WidgetState {
    match state.highlighted_suggestion() {
        Some(choice) => state
            .with_selected(Some(choice.to_string()))
            .with_suggestions(Vec::new()),
        None => state.with_selected(None),
    }
}

/// Settle phase of a selection
pub fn deselect(state: &WidgetState) -> WidgetState {
    state.with_selected(None)
}

/// Close the menu without touching highlight or selection
pub fn hide(state: &WidgetState) -> WidgetState {
    state.with_suggestions(Vec::new())
}

pub fn want_delete(state: &WidgetState, key: Option<usize>) -> WidgetState {
    match key {
        Some(key) => state.with_pending_delete_key(Some(key)),
        None => state.clone(),
    }
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod reducer_tests;
