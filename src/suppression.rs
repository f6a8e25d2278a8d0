//! Default-action suppression
//!
//! Keep-focus intents (Enter, Tab, blur onto a suggestion) cancel the
//! browser-style default action of their raw event only while a commit is
//! possible: the menu is open and something is highlighted.

use crate::intent::KeepFocusCause;
use crate::state::WidgetState;

/// Whether a keep-focus event must have its default action cancelled
pub fn should_cancel(state: &WidgetState) -> bool {
    !state.suggestions.is_empty() && state.highlighted.is_some()
}

/// A cancelled default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suppression {
    pub cause: KeepFocusCause,
}

/// Decide for one keep-focus intent against the state in effect now
pub fn suppress(cause: KeepFocusCause, state: &WidgetState) -> Option<Suppression> {
    should_cancel(state).then_some(Suppression { cause })
}
