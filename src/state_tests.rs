//! Tests for the widget state value

use super::*;

fn abc() -> Vec<String> {
    vec!["a".to_string(), "b".to_string(), "c".to_string()]
}

#[test]
fn test_default_state_is_empty() {
    let state = WidgetState::default();
    assert!(state.suggestions.is_empty());
    assert_eq!(state.highlighted, None);
    assert_eq!(state.selected, None);
    assert!(state.selected_list.is_empty());
    assert_eq!(state.pending_delete_key, None);
    assert!(!state.is_menu_open());
}

#[test]
fn test_seeded_only_sets_suggestions() {
    let state = WidgetState::seeded(abc());
    assert_eq!(state.suggestions, abc());
    assert_eq!(state.highlighted, None);
    assert!(state.is_menu_open());
}

#[test]
fn test_with_methods_leave_original_untouched() {
    let original = WidgetState::seeded(abc());
    let next = original
        .with_highlighted(Some(1))
        .with_selected(Some("b".to_string()))
        .with_pending_delete_key(Some(0));

    assert_eq!(original.highlighted, None);
    assert_eq!(original.selected, None);
    assert_eq!(next.highlighted, Some(1));
    assert_eq!(next.selected.as_deref(), Some("b"));
    assert_eq!(next.pending_delete_key, Some(0));
    assert_eq!(next.suggestions, abc());
}

#[test]
fn test_highlighted_suggestion() {
    let state = WidgetState::seeded(abc()).with_highlighted(Some(2));
    assert_eq!(state.highlighted_suggestion(), Some("c"));
}

#[test]
fn test_highlighted_suggestion_out_of_range() {
    let state = WidgetState::seeded(abc()).with_highlighted(Some(7));
    assert_eq!(state.highlighted_suggestion(), None);
}
