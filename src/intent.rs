//! Intent extraction
//!
//! Turns raw interaction events into the named intents the reducers consume.
//! The extractor owns the only timing state in the pipeline: the focus
//! window, the item-press window, the armed click target and the two
//! debouncers.

use crate::debounce::Debouncer;
use crate::timeline::{TargetId, Timed, Timestamp};
use crate::window::{Between, Gate, NotBetween};

/// Default quiet period before a typed query is searched
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Default window in which duplicate commit triggers collapse
pub const SELECT_DEBOUNCE_MS: u64 = 1;

/// Keys the widget distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Tab,
    Other,
}

/// Interaction events delivered by the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    /// The input text changed; carries the resulting value
    Input { value: String },
    KeyDown { key: Key },
    /// Pointer entered the suggestion row at `index`
    ItemHover { index: usize },
    ItemMouseDown { target: TargetId },
    ItemMouseUp { target: TargetId },
    Focus,
    Blur,
    /// A delete button was clicked; `value` is the button's value attribute
    DeleteClick { value: String },
}

/// Why the input should keep focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepFocusCause {
    /// Blur caused by pressing on a suggestion
    BlurToItem,
    Enter,
    Tab,
}

/// Semantic events derived from raw events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(String),
    MoveHighlight(isize),
    SetHighlight(usize),
    KeepFocusOnInput(KeepFocusCause),
    SelectHighlighted,
    WantsSuggestions(bool),
    QuitAutocomplete,
    /// Index of the list entry to delete; `None` when the button value was unusable
    WantDeleted(Option<usize>),
}

/// Debounce periods, in the same units as [`Timestamp`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentConfig {
    pub search_debounce_ms: u64,
    pub select_debounce_ms: u64,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            select_debounce_ms: SELECT_DEBOUNCE_MS,
        }
    }
}

/// Highlight delta for a key; zero for keys that do not move the highlight
pub fn highlight_delta(key: Key) -> isize {
    match key {
        Key::Up => -1,
        Key::Down => 1,
        _ => 0,
    }
}

/// Parse a delete button's value attribute into a list index
pub fn parse_delete_key(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

pub struct IntentExtractor {
    /// Open between input focus and blur; scopes `search`
    focus: Between,
    /// Open between an item mouse-down and the next item mouse-up
    blur_to_item: Between,
    /// Complement of `blur_to_item`
    blur_elsewhere: NotBetween,
    /// Target of the last item mouse-down still waiting for its mouse-up
    armed_press: Option<TargetId>,
    search: Debouncer<String>,
    select: Debouncer<()>,
}

impl IntentExtractor {
    pub fn new(config: IntentConfig) -> Self {
        Self {
            focus: Between::new(),
            blur_to_item: Between::new(),
            blur_elsewhere: NotBetween::new(),
            armed_press: None,
            search: Debouncer::new(config.search_debounce_ms),
            select: Debouncer::new(config.select_debounce_ms),
        }
    }

    /// Whether the input is inside a focus window
    pub fn is_focused(&self) -> bool {
        self.focus.is_open()
    }

    /// Earliest pending debounce deadline
    pub fn next_deadline(&self) -> Option<Timestamp> {
        match (self.search.deadline(), self.select.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Feed one raw event
    ///
    /// Timers due at or before the event's timestamp fire first, so the
    /// returned intents are in the order they logically happened.
    pub fn feed(&mut self, event: &Timed<RawEvent>) -> Vec<Intent> {
        let mut intents = self.poll(event.at);

        match &event.value {
            RawEvent::Input { value } => {
                self.search.push(event.at, value.clone());
                if value.is_empty() {
                    intents.push(Intent::QuitAutocomplete);
                }
            }
            RawEvent::KeyDown { key } => {
                let delta = highlight_delta(*key);
                if delta != 0 {
                    intents.push(Intent::MoveHighlight(delta));
                }
                match key {
                    Key::Enter => {
                        intents.push(Intent::KeepFocusOnInput(KeepFocusCause::Enter));
                        self.select.push(event.at, ());
                    }
                    Key::Tab => {
                        intents.push(Intent::KeepFocusOnInput(KeepFocusCause::Tab));
                        self.select.push(event.at, ());
                    }
                    _ => {}
                }
            }
            RawEvent::ItemHover { index } => intents.push(Intent::SetHighlight(*index)),
            RawEvent::ItemMouseDown { target } => {
                self.blur_to_item.on_first();
                self.blur_elsewhere.on_first();
                self.armed_press = Some(*target);
            }
            RawEvent::ItemMouseUp { target } => {
                self.blur_to_item.on_second();
                self.blur_elsewhere.on_second();
                if self.armed_press == Some(*target) {
                    self.armed_press = None;
                    self.select.push(event.at, ());
                }
            }
            RawEvent::Focus => {
                self.focus.on_first();
                intents.push(Intent::WantsSuggestions(true));
            }
            RawEvent::Blur => {
                if self.blur_to_item.passes() {
                    intents.push(Intent::KeepFocusOnInput(KeepFocusCause::BlurToItem));
                }
                if self.blur_elsewhere.passes() {
                    intents.push(Intent::QuitAutocomplete);
                }
                self.focus.on_second();
                intents.push(Intent::WantsSuggestions(false));
            }
            RawEvent::DeleteClick { value } => {
                intents.push(Intent::WantDeleted(parse_delete_key(value)));
            }
        }

        log::trace!("{} {:?} -> {:?}", event.at, event.value, intents);
        intents
    }

    /// Fire every debounce timer due at or before `now`, earliest first
    pub fn poll(&mut self, now: Timestamp) -> Vec<Intent> {
        let mut intents = Vec::new();

        loop {
            let search_due = self.search.deadline().filter(|d| *d <= now);
            let select_due = self.select.deadline().filter(|d| *d <= now);

            match (search_due, select_due) {
                (None, None) => break,
                (Some(search_at), Some(select_at)) if select_at < search_at => {
                    self.fire_select(now, &mut intents)
                }
                (Some(_), _) => self.fire_search(now, &mut intents),
                (None, Some(_)) => self.fire_select(now, &mut intents),
            }
        }

        intents
    }

    fn fire_search(&mut self, now: Timestamp, intents: &mut Vec<Intent>) {
        let Some(query) = self.search.poll(now) else {
            return;
        };
        // Scoped to the focus window at the moment the quiet period ends
        match self.focus.gate(query) {
            Some(query) if !query.is_empty() => intents.push(Intent::Search(query)),
            Some(_) => {}
            None => log::debug!("dropping search typed before blur"),
        }
    }

    fn fire_select(&mut self, now: Timestamp, intents: &mut Vec<Intent>) {
        if self.select.poll(now).is_some() {
            intents.push(Intent::SelectHighlighted);
        }
    }
}

impl Default for IntentExtractor {
    fn default() -> Self {
        Self::new(IntentConfig::default())
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod intent_tests;
