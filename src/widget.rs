//! The assembled autocomplete widget
//!
//! `Autocomplete` wires the pipeline together: raw events go through the
//! [`IntentExtractor`], intents become [`Reducer`]s folded by the [`Model`],
//! and keep-focus intents are checked against the state in effect at the
//! moment they arrive. Front-ends call [`Autocomplete::handle`] for each raw
//! event, [`Autocomplete::tick`] when a debounce deadline passes and
//! [`Autocomplete::deliver`] when a suggestion batch arrives.

use crate::intent::{Intent, IntentConfig, IntentExtractor, RawEvent};
use crate::model::Model;
use crate::reducer::Reducer;
use crate::source::SuggestionBatch;
use crate::state::WidgetState;
use crate::suppression::suppress;
use crate::timeline::{Timed, Timestamp};

/// Everything one call into the widget produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    /// Every emitted state, oldest first
    pub states: Vec<WidgetState>,
    /// Whether the raw event just handled must have its default action cancelled
    pub prevent_default: bool,
    /// Queries to send to the suggestion source
    pub queries: Vec<String>,
}

impl Reaction {
    /// Latest emitted state, if any transition happened
    pub fn last_state(&self) -> Option<&WidgetState> {
        self.states.last()
    }
}

pub struct Autocomplete {
    intents: IntentExtractor,
    model: Model,
}

impl Autocomplete {
    pub fn new(config: IntentConfig) -> Self {
        Self {
            intents: IntentExtractor::new(config),
            model: Model::new(),
        }
    }

    /// Latest externally visible state
    pub fn state(&self) -> &WidgetState {
        self.model.state()
    }

    pub fn is_focused(&self) -> bool {
        self.intents.is_focused()
    }

    /// When `tick` next has work to do
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.intents.next_deadline()
    }

    /// Feed one raw interaction event
    pub fn handle(&mut self, event: Timed<RawEvent>) -> Reaction {
        let intents = self.intents.feed(&event);
        self.process(intents)
    }

    /// Fire debounce timers due at `now`
    pub fn tick(&mut self, now: Timestamp) -> Reaction {
        let intents = self.intents.poll(now);
        self.process(intents)
    }

    /// Feed a suggestion batch from the source
    pub fn deliver(&mut self, batch: SuggestionBatch) -> Reaction {
        log::debug!(
            "batch for {:?}: {} suggestions",
            batch.query,
            batch.suggestions.len()
        );
        Reaction {
            states: vec![self.model.receive_batch(batch.suggestions)],
            ..Reaction::default()
        }
    }

    fn process(&mut self, intents: Vec<Intent>) -> Reaction {
        let mut reaction = Reaction::default();

        for intent in intents {
            match &intent {
                Intent::Search(query) => reaction.queries.push(query.clone()),
                Intent::WantsSuggestions(wants) => self.model.set_wants_suggestions(*wants),
                Intent::KeepFocusOnInput(cause) => {
                    if let Some(suppression) = suppress(*cause, self.model.state()) {
                        log::debug!("cancelling default action: {:?}", suppression.cause);
                        reaction.prevent_default = true;
                    }
                }
                _ => {}
            }

            for reducer in Reducer::for_intent(&intent) {
                reaction.states.push(self.model.apply(&reducer));
            }
        }

        reaction
    }
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(IntentConfig::default())
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod widget_tests;
