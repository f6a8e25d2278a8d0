//! Tests for front-end state

use super::*;
use crate::source::SuggestionBatch;
use crate::tui::test_helpers::test_app;

fn ms(value: u64) -> Timestamp {
    Timestamp::from_millis(value)
}

fn batch(query: &str, items: &[&str]) -> SourceEvent {
    SourceEvent::Batch(SuggestionBatch {
        query: query.to_string(),
        suggestions: items.iter().map(|s| s.to_string()).collect(),
    })
}

#[test]
fn test_app_starts_with_query_focused() {
    let (app, _) = test_app();
    assert_eq!(app.focus, Focus::QueryInput);
    assert!(app.widget.is_focused());
    assert!(!app.should_quit);
    assert_eq!(app.query(), "");
}

#[test]
fn test_set_query_replaces_text() {
    let (mut app, source) = test_app();
    app.set_query("first");
    app.set_query("second");
    assert_eq!(app.query(), "second");
    assert!(source.queries.borrow().is_empty());
}

#[test]
fn test_debounced_query_reaches_source() {
    let (mut app, source) = test_app();
    app.feed(
        RawEvent::Input {
            value: "ca".to_string(),
        },
        ms(10),
    );
    app.tick(ms(509));
    assert!(source.queries.borrow().is_empty());

    app.tick(ms(510));
    assert_eq!(*source.queries.borrow(), vec!["ca".to_string()]);
}

#[test]
fn test_batch_updates_view() {
    let (mut app, _) = test_app();
    app.receive(batch("ca", &["cat", "car"]));
    assert_eq!(app.view.suggestions, vec!["cat", "car"]);
}

#[test]
fn test_failure_sets_status() {
    let (mut app, _) = test_app();
    app.receive(SourceEvent::Failed {
        query: "ca".to_string(),
        message: "HTTP status 503".to_string(),
    });
    assert_eq!(
        app.status.as_deref(),
        Some("Suggestions unavailable: HTTP status 503")
    );

    app.receive(batch("ca", &["cat"]));
    assert_eq!(app.status, None);
}

#[test]
fn test_blur_closes_menu() {
    let (mut app, _) = test_app();
    app.receive(batch("ca", &["cat", "car"]));

    let cancelled = app.blur_query(Focus::OtherInput, ms(100));
    assert!(!cancelled);
    assert_eq!(app.focus, Focus::OtherInput);
    assert!(app.view.suggestions.is_empty());
}

#[test]
fn test_blur_when_not_focused_feeds_nothing() {
    let (mut app, _) = test_app();
    app.blur_query(Focus::Nothing, ms(100));
    let before = app.view.clone();

    assert!(!app.blur_query(Focus::OtherInput, ms(200)));
    assert_eq!(app.focus, Focus::OtherInput);
    assert_eq!(app.view, before);
}

#[test]
fn test_batch_after_blur_stays_hidden() {
    let (mut app, _) = test_app();
    app.blur_query(Focus::Nothing, ms(100));
    app.receive(batch("ca", &["cat"]));
    assert!(app.view.suggestions.is_empty());
}
