//! Front-end state around the widget
//!
//! `App` owns the widget, the two text fields and the latest rendered
//! state. Every input handler takes the current virtual time so the whole
//! front-end can be driven deterministically in tests.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::intent::RawEvent;
use crate::source::{SourceEvent, SuggestionSource};
use crate::state::WidgetState;
use crate::timeline::{Timed, Timestamp};
use crate::tui::layout::LayoutRegions;
use crate::widget::{Autocomplete, Reaction};

/// Which field receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QueryInput,
    OtherInput,
    Nothing,
}

pub struct App {
    pub widget: Autocomplete,
    /// Latest state emitted by the widget
    pub view: WidgetState,
    pub focus: Focus,
    pub query_input: TextArea<'static>,
    pub other_input: TextArea<'static>,
    pub regions: LayoutRegions,
    pub status: Option<String>,
    pub should_quit: bool,
    /// Menu row the mouse is currently over
    pub(crate) hovered: Option<usize>,
    /// Focus goes back to the query field when the mouse is released
    pub(crate) restore_focus_on_release: bool,
    source: Box<dyn SuggestionSource>,
}

fn single_line_input(title: &'static str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea
}

impl App {
    /// Create an app with the query field focused at time zero
    pub fn new(widget: Autocomplete, source: Box<dyn SuggestionSource>) -> Self {
        let mut app = Self {
            widget,
            view: WidgetState::default(),
            focus: Focus::Nothing,
            query_input: single_line_input(" Query "),
            other_input: single_line_input(" Some field "),
            regions: LayoutRegions::default(),
            status: None,
            should_quit: false,
            hovered: None,
            restore_focus_on_release: false,
            source,
        };
        app.focus_query(Timestamp::ZERO);
        app
    }

    pub fn query(&self) -> &str {
        self.query_input
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn other(&self) -> &str {
        self.other_input
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Replace the query text without emitting an input event
    pub fn set_query(&mut self, text: &str) {
        self.query_input.select_all();
        self.query_input.cut();
        self.query_input.insert_str(text);
    }

    /// Feed a raw event to the widget and apply what it produced
    pub(crate) fn feed(&mut self, event: RawEvent, now: Timestamp) -> Reaction {
        let reaction = self.widget.handle(Timed::new(now, event));
        self.absorb(&reaction);
        reaction
    }

    /// Fire debounce timers due at `now`
    pub fn tick(&mut self, now: Timestamp) {
        let reaction = self.widget.tick(now);
        self.absorb(&reaction);
    }

    /// Handle a message from the suggestion worker
    pub fn receive(&mut self, event: SourceEvent) {
        match event {
            SourceEvent::Batch(batch) => {
                self.status = None;
                let reaction = self.widget.deliver(batch);
                self.absorb(&reaction);
            }
            SourceEvent::Failed { query, message } => {
                log::warn!("suggestions for {:?} failed: {}", query, message);
                self.status = Some(format!("Suggestions unavailable: {}", message));
            }
        }
    }

    fn absorb(&mut self, reaction: &Reaction) {
        for query in &reaction.queries {
            self.source.request(query);
        }

        for state in &reaction.states {
            if let Some(selected) = &state.selected {
                self.set_query(selected);
            }
        }

        // A reseed or keyboard move leaves the row under the mouse unhighlighted
        if reaction
            .states
            .iter()
            .any(|state| !state.is_menu_open() || state.highlighted != self.hovered)
        {
            self.hovered = None;
        }

        if let Some(state) = reaction.last_state() {
            self.view = state.clone();
        }
    }

    pub(crate) fn focus_query(&mut self, now: Timestamp) {
        if self.focus == Focus::QueryInput {
            return;
        }
        self.focus = Focus::QueryInput;
        self.feed(RawEvent::Focus, now);
    }

    /// Move focus away from the query field
    ///
    /// Returns whether the widget cancelled the blur.
    pub(crate) fn blur_query(&mut self, next: Focus, now: Timestamp) -> bool {
        if self.focus != Focus::QueryInput {
            self.focus = next;
            return false;
        }
        self.focus = next;
        self.feed(RawEvent::Blur, now).prevent_default
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
