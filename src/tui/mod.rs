//! Terminal front-end
//!
//! Draws a small form around the widget and translates terminal input
//! into raw widget events. Wall-clock time is converted to virtual time
//! here and nowhere else.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::source::SourceEvent;
use crate::timeline::Timestamp;

mod app;
mod events;
pub mod layout;
mod render;

pub use app::{App, Focus};
pub use render::render;

/// Longest wait for terminal input, so worker results are drawn promptly
const IDLE_POLL_MS: u64 = 50;

/// How long to wait for input before the next timer is due
pub fn poll_timeout(deadline: Option<Timestamp>, now: Timestamp) -> Duration {
    let wait = deadline.map_or(IDLE_POLL_MS, |deadline| now.until(deadline));
    Duration::from_millis(wait.min(IDLE_POLL_MS))
}

/// Run the event loop until the user quits
pub fn run(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    source_events: &Receiver<SourceEvent>,
) -> io::Result<()> {
    let started = Instant::now();
    let now = || Timestamp::from_millis(started.elapsed().as_millis() as u64);

    while !app.should_quit {
        terminal.draw(|frame| render(app, frame))?;

        while let Ok(source_event) = source_events.try_recv() {
            app.receive(source_event);
        }

        if event::poll(poll_timeout(app.widget.next_deadline(), now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key, now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse, now()),
                _ => {}
            }
        }

        app.tick(now());
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use super::App;
    use crate::source::SuggestionSource;
    use crate::widget::Autocomplete;

    /// Source that remembers every query it was asked for
    #[derive(Clone, Default)]
    pub struct RecordingSource {
        pub queries: Rc<RefCell<Vec<String>>>,
    }

    impl SuggestionSource for RecordingSource {
        fn request(&self, query: &str) {
            self.queries.borrow_mut().push(query.to_string());
        }
    }

    pub fn test_app() -> (App, RecordingSource) {
        let source = RecordingSource::default();
        let app = App::new(Autocomplete::default(), Box::new(source.clone()));
        (app, source)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn press(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    pub fn release(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_waits_for_deadline() {
        let now = Timestamp::from_millis(100);
        assert_eq!(
            poll_timeout(Some(Timestamp::from_millis(120)), now),
            Duration::from_millis(20)
        );
    }

    #[test]
    fn test_poll_timeout_is_capped() {
        let now = Timestamp::from_millis(100);
        assert_eq!(
            poll_timeout(Some(Timestamp::from_millis(600)), now),
            Duration::from_millis(IDLE_POLL_MS)
        );
        assert_eq!(poll_timeout(None, now), Duration::from_millis(IDLE_POLL_MS));
    }

    #[test]
    fn test_poll_timeout_for_overdue_deadline_is_zero() {
        let now = Timestamp::from_millis(100);
        assert_eq!(
            poll_timeout(Some(Timestamp::from_millis(90)), now),
            Duration::ZERO
        );
    }
}
