//! autosuggest: an autocomplete combo box as a deterministic event pipeline
//!
//! Raw interaction events are turned into intents, intents into reducers,
//! and reducers are folded into a single current [`WidgetState`]. The
//! pipeline runs on virtual time and never blocks; suggestion fetching and
//! rendering live at its edges.

pub mod config;
pub mod debounce;
pub mod error;
pub mod intent;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod source;
pub mod state;
pub mod suppression;
pub mod timeline;
pub mod tui;
pub mod widget;
pub mod window;

pub use error::AutosuggestError;
pub use intent::{Intent, IntentConfig, Key, RawEvent};
pub use state::WidgetState;
pub use timeline::{TargetId, Timed, Timestamp};
pub use widget::{Autocomplete, Reaction};
