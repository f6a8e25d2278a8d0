//! Tests for model orchestration

use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn wanting() -> Model {
    let mut model = Model::new();
    model.set_wants_suggestions(true);
    model
}

fn commit(model: &mut Model) -> (WidgetState, WidgetState) {
    let selected = model.apply(&Reducer::SelectHighlighted);
    let settled = model.apply(&Reducer::Deselect);
    (selected, settled)
}

fn list_of(model: &mut Model, items: &[&str]) {
    for item in items {
        model.receive_batch(strings(&[item]));
        model.apply(&Reducer::MoveHighlight(1));
        commit(model);
    }
}

#[test]
fn test_initial_state_is_empty() {
    let model = Model::new();
    assert_eq!(model.state(), &WidgetState::default());
    assert!(!model.wants_suggestions());
}

#[test]
fn test_batch_seeds_fresh_state() {
    let mut model = wanting();
    model.receive_batch(strings(&["a", "b"]));
    model.apply(&Reducer::MoveHighlight(1));

    let state = model.receive_batch(strings(&["x", "y", "z"]));
    assert_eq!(state.suggestions, strings(&["x", "y", "z"]));
    assert_eq!(state.highlighted, None);
    assert_eq!(state.selected, None);
}

#[test]
fn test_batch_while_unwanted_becomes_empty() {
    let mut model = Model::new();
    let state = model.receive_batch(strings(&["late", "response"]));
    assert!(state.suggestions.is_empty());
}

#[test]
fn test_reducers_fold_onto_latest_state() {
    let mut model = wanting();
    model.receive_batch(strings(&["a", "b", "c"]));

    assert_eq!(model.apply(&Reducer::MoveHighlight(1)).highlighted, Some(0));
    assert_eq!(model.apply(&Reducer::MoveHighlight(1)).highlighted, Some(1));
    assert_eq!(model.apply(&Reducer::MoveHighlight(-1)).highlighted, Some(0));
}

#[test]
fn test_commit_appends_once_and_settles() {
    let mut model = wanting();
    model.receive_batch(strings(&["a", "b", "c"]));
    model.apply(&Reducer::SetHighlight(1));

    let (selected, settled) = commit(&mut model);
    assert_eq!(selected.selected.as_deref(), Some("b"));
    assert!(selected.suggestions.is_empty());
    assert_eq!(selected.selected_list, strings(&["b"]));

    assert_eq!(settled.selected, None);
    assert_eq!(settled.selected_list, strings(&["b"]));

    // Further transitions do not append again
    let after = model.apply(&Reducer::Hide);
    assert_eq!(after.selected_list, strings(&["b"]));
}

#[test]
fn test_list_survives_batch_reset() {
    let mut model = wanting();
    list_of(&mut model, &["x"]);

    let state = model.receive_batch(strings(&["fresh"]));
    assert_eq!(state.selected_list, strings(&["x"]));
}

#[test]
fn test_delete_first_entry() {
    let mut model = wanting();
    list_of(&mut model, &["x", "y"]);

    let state = model.apply(&Reducer::WantDelete(Some(0)));
    assert_eq!(state.selected_list, strings(&["y"]));
    assert_eq!(state.pending_delete_key, None);
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let mut model = wanting();
    list_of(&mut model, &["x", "y"]);

    let state = model.apply(&Reducer::WantDelete(Some(2)));
    assert_eq!(state.selected_list, strings(&["x", "y"]));
}

#[test]
fn test_delete_key_is_single_use() {
    let mut model = wanting();
    list_of(&mut model, &["x", "y", "z"]);

    model.apply(&Reducer::WantDelete(Some(0)));
    let state = model.apply(&Reducer::Hide);
    assert_eq!(state.selected_list, strings(&["y", "z"]));
}

#[test]
fn test_delete_on_empty_list_is_noop() {
    let mut model = wanting();
    let state = model.apply(&Reducer::WantDelete(Some(0)));
    assert!(state.selected_list.is_empty());
}

#[test]
fn test_selection_list_deletes_before_appending() {
    let mut list = SelectionList::new();
    list.fold(&WidgetState::default().with_selected(Some("x".to_string())));
    list.fold(
        &WidgetState::default()
            .with_pending_delete_key(Some(1))
            .with_selected(Some("y".to_string())),
    );
    // Index 1 was out of range before the append, so nothing is removed
    assert_eq!(list.entries(), strings(&["x", "y"]).as_slice());
}

#[test]
fn test_commit_without_highlight_appends_nothing() {
    let mut model = wanting();
    model.receive_batch(strings(&["a"]));
    let (selected, settled) = commit(&mut model);
    assert_eq!(selected.selected, None);
    assert!(settled.selected_list.is_empty());
    assert_eq!(settled.suggestions, strings(&["a"]));
}
