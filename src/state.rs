//! Widget state value
//!
//! `WidgetState` is replaced wholesale on every transition. Consumers only
//! ever see a finished value; the `with_*` methods build the next one.

/// Complete state of one autocomplete widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    /// Current candidates; empty while the menu is hidden
    pub suggestions: Vec<String>,
    /// Index into `suggestions`
    pub highlighted: Option<usize>,
    /// Suggestion committed by the most recent transition
    pub selected: Option<String>,
    /// Every committed selection, after deletions
    pub selected_list: Vec<String>,
    /// Index into `selected_list` to remove on the next fold step
    pub pending_delete_key: Option<usize>,
}

impl WidgetState {
    /// Fresh per-batch state seeded with a suggestion list
    pub fn seeded(suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            ..Self::default()
        }
    }

    pub fn with_suggestions(&self, suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            ..self.clone()
        }
    }

    pub fn with_highlighted(&self, highlighted: Option<usize>) -> Self {
        Self {
            highlighted,
            ..self.clone()
        }
    }

    pub fn with_selected(&self, selected: Option<String>) -> Self {
        Self {
            selected,
            ..self.clone()
        }
    }

    pub fn with_selected_list(&self, selected_list: Vec<String>) -> Self {
        Self {
            selected_list,
            ..self.clone()
        }
    }

    pub fn with_pending_delete_key(&self, pending_delete_key: Option<usize>) -> Self {
        Self {
            pending_delete_key,
            ..self.clone()
        }
    }

    /// Whether the suggestion menu is showing
    pub fn is_menu_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// The suggestion under the highlight, if the highlight is in range
    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.highlighted
            .and_then(|i| self.suggestions.get(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
