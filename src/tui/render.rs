//! Drawing the form
//!
//! Layout top to bottom: the query row, the selection list, the other
//! field and a status line. The suggestion menu is drawn last, as an
//! overlay hanging from the query input.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::{App, Focus};

const LABEL_WIDTH: u16 = 13;
const INPUT_WIDTH: u16 = 40;
const MAX_MENU_ROWS: usize = 10;
const DELETE_BUTTON: &str = "[x]";

const HIGHLIGHT_BG: Color = Color::LightGreen;
const FOCUSED_BORDER: Color = Color::Cyan;
const UNFOCUSED_BORDER: Color = Color::DarkGray;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUSED_BORDER)
    } else {
        Style::default().fg(UNFOCUSED_BORDER)
    }
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Split a field row into its label and input areas
fn field_row(area: Rect) -> (Rect, Rect) {
    let [label, input, _] = Layout::horizontal([
        Constraint::Length(LABEL_WIDTH),
        Constraint::Length(INPUT_WIDTH.min(area.width.saturating_sub(LABEL_WIDTH))),
        Constraint::Min(0),
    ])
    .areas(area);
    (label, input)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    app.regions.clear();

    let list_height = if app.view.selected_list.is_empty() {
        0
    } else {
        to_u16(app.view.selected_list.len()).saturating_add(2)
    };
    let [query_row, list_area, other_row, _, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(list_height),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let query_input = render_field(app, frame, query_row, Focus::QueryInput);
    app.regions.query_input = Some(query_input);

    render_selection_list(app, frame, list_area);

    let other_input = render_field(app, frame, other_row, Focus::OtherInput);
    app.regions.other_input = Some(other_input);

    render_status(app, frame, status_area);
    render_menu(app, frame, query_input);
}

fn render_field(app: &mut App, frame: &mut Frame, row: Rect, field: Focus) -> Rect {
    let (label_area, input_area) = field_row(row);
    let focused = app.focus == field;
    let (label, textarea) = match field {
        Focus::OtherInput => ("Some field:", &mut app.other_input),
        _ => ("Query:", &mut app.query_input),
    };

    let label_line = Rect {
        y: label_area.y + 1,
        height: 1,
        ..label_area
    };
    frame.render_widget(Paragraph::new(label), label_line);

    if let Some(block) = textarea.block().cloned() {
        textarea.set_block(block.border_style(border_style(focused)));
    }
    textarea.set_cursor_style(cursor_style(focused));
    frame.render_widget(&*textarea, input_area);

    input_area
}

fn render_selection_list(app: &mut App, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Selected ")
        .border_style(Style::default().fg(UNFOCUSED_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .view
        .selected_list
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(DELETE_BUTTON, Style::default().fg(Color::Red)),
                Span::raw(" "),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    let visible = to_u16(app.view.selected_list.len()).min(inner.height);
    for offset in 0..visible {
        app.regions.delete_buttons.push(Rect::new(
            inner.x,
            inner.y + offset,
            to_u16(DELETE_BUTTON.len()),
            1,
        ));
    }
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let text = match &app.status {
        Some(status) => status.clone(),
        None => " Up/Down move  Enter/Tab/click select  Esc quit".to_string(),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_menu(app: &mut App, frame: &mut Frame, input_area: Rect) {
    if !app.view.is_menu_open() {
        return;
    }

    let frame_area = frame.area();
    let top = input_area.y + input_area.height;
    let available = frame_area.height.saturating_sub(top);
    let rows = app
        .view
        .suggestions
        .len()
        .min(MAX_MENU_ROWS)
        .min(available.saturating_sub(2) as usize);
    if rows == 0 {
        return;
    }

    let widest = app
        .view
        .suggestions
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0);
    let width = to_u16(widest)
        .saturating_add(4)
        .max(input_area.width)
        .min(frame_area.width.saturating_sub(input_area.x));
    let menu_area = Rect::new(input_area.x, top, width, rows as u16 + 2);

    let items: Vec<ListItem> = app
        .view
        .suggestions
        .iter()
        .take(rows)
        .enumerate()
        .map(|(index, suggestion)| {
            let item = ListItem::new(format!(" {}", suggestion));
            if app.view.highlighted == Some(index) {
                item.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(HIGHLIGHT_BG)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(UNFOCUSED_BORDER));
    let inner = block.inner(menu_area);

    frame.render_widget(Clear, menu_area);
    frame.render_widget(List::new(items).block(block), menu_area);

    for index in 0..rows {
        app.regions
            .menu_items
            .push(Rect::new(inner.x, inner.y + index as u16, inner.width, 1));
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
