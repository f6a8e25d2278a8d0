//! Screen regions for position-aware mouse interactions
//!
//! The renderer records where each interactive element was drawn, and
//! `region_at()` maps a mouse position back to the element under it.

use ratatui::layout::Rect;

/// Interactive element under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    QueryInput,
    /// Suggestion row by index
    MenuItem(usize),
    /// Delete button of a selection list entry by index
    DeleteButton(usize),
    OtherInput,
}

/// Where each element was last rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub query_input: Option<Rect>,
    pub other_input: Option<Rect>,
    pub menu_items: Vec<Rect>,
    pub delete_buttons: Vec<Rect>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Element at a screen position
///
/// The menu is drawn over everything else, so its rows win.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if let Some(index) = regions
        .menu_items
        .iter()
        .position(|rect| contains(*rect, column, row))
    {
        return Some(Region::MenuItem(index));
    }

    if let Some(index) = regions
        .delete_buttons
        .iter()
        .position(|rect| contains(*rect, column, row))
    {
        return Some(Region::DeleteButton(index));
    }

    if regions.query_input.is_some_and(|r| contains(r, column, row)) {
        return Some(Region::QueryInput);
    }

    if regions.other_input.is_some_and(|r| contains(r, column, row)) {
        return Some(Region::OtherInput);
    }

    None
}
