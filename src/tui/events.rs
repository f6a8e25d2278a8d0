//! Terminal input handling
//!
//! Maps crossterm key and mouse events onto the widget's raw events and
//! runs the default action of a key whenever the widget did not cancel it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::app::{App, Focus};
use super::layout::{Region, region_at};
use crate::intent::{Key, RawEvent};
use crate::timeline::{TargetId, Timestamp};

fn widget_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        _ => Key::Other,
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent, now: Timestamp) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::QueryInput => self.handle_query_key(key, now),
            Focus::OtherInput => self.handle_other_key(key, now),
            Focus::Nothing => {
                if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                    self.focus_query(now);
                }
            }
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent, now: Timestamp) {
        let reaction = self.feed(
            RawEvent::KeyDown {
                key: widget_key(key.code),
            },
            now,
        );
        if reaction.prevent_default {
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.blur_query(Focus::OtherInput, now);
            }
            KeyCode::Enter => self.submit(),
            // Single-line field: vertical movement has nothing to do
            KeyCode::Up | KeyCode::Down | KeyCode::BackTab => {}
            _ => {
                if self.query_input.input(key) {
                    let value = self.query().to_string();
                    self.feed(RawEvent::Input { value }, now);
                }
            }
        }
    }

    fn handle_other_key(&mut self, key: KeyEvent, now: Timestamp) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.focus_query(now),
            KeyCode::Enter => self.submit(),
            KeyCode::Up | KeyCode::Down => {}
            _ => {
                self.other_input.input(key);
            }
        }
    }

    fn submit(&mut self) {
        log::info!("submitted query={:?} other={:?}", self.query(), self.other());
        self.status = Some(format!(
            "Submitted: query={:?}, some field={:?}",
            self.query(),
            self.other()
        ));
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Timestamp) {
        let region = region_at(&self.regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.handle_hover(region, now);
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(region, now),
            MouseEventKind::Up(MouseButton::Left) => self.handle_release(region, now),
            _ => {}
        }
    }

    fn handle_hover(&mut self, region: Option<Region>, now: Timestamp) {
        match region {
            Some(Region::MenuItem(index)) => {
                if self.hovered != Some(index) {
                    self.hovered = Some(index);
                    self.feed(RawEvent::ItemHover { index }, now);
                }
            }
            _ => self.hovered = None,
        }
    }

    fn handle_press(&mut self, region: Option<Region>, now: Timestamp) {
        match region {
            Some(Region::MenuItem(index)) => {
                // Not every terminal reports motion before a click
                if self.view.highlighted != Some(index) {
                    self.hovered = Some(index);
                    self.feed(RawEvent::ItemHover { index }, now);
                }
                self.feed(
                    RawEvent::ItemMouseDown {
                        target: TargetId(index as u64),
                    },
                    now,
                );
                self.restore_focus_on_release = self.blur_query(Focus::Nothing, now);
            }
            Some(Region::DeleteButton(index)) => {
                self.blur_query(Focus::Nothing, now);
                self.feed(
                    RawEvent::DeleteClick {
                        value: index.to_string(),
                    },
                    now,
                );
            }
            Some(Region::QueryInput) => self.focus_query(now),
            Some(Region::OtherInput) => {
                self.blur_query(Focus::OtherInput, now);
            }
            None => {
                self.blur_query(Focus::Nothing, now);
            }
        }
    }

    fn handle_release(&mut self, region: Option<Region>, now: Timestamp) {
        if let Some(Region::MenuItem(index)) = region {
            self.feed(
                RawEvent::ItemMouseUp {
                    target: TargetId(index as u64),
                },
                now,
            );
        }

        if self.restore_focus_on_release {
            self.restore_focus_on_release = false;
            self.focus_query(now);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
