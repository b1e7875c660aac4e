//! Home screen layout and overlay stacking.
//!
//! Pure layout logic: the screen splits into search bar, category row,
//! filter chips, grid and status bar. Overlays draw on top in a fixed
//! order: filter sheet, detail view, help, then any toast.

use super::constants::{
    CATEGORY_ROW_HEIGHT, CHIP_ROW_HEIGHT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use super::detail::render_detail;
use super::filter_sheet::render_filter_sheet;
use super::grid::ResultsGrid;
use super::header::{CategoryRow, FilterChips, SearchBar, StatusBar};
use super::help::render_help_overlay;
use super::toast::render_toast;
use crate::state::{AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Regions of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAreas {
    /// Search bar.
    pub search: Rect,
    /// Category chip row.
    pub categories: Rect,
    /// Active filter chips.
    pub chips: Rect,
    /// Results grid.
    pub grid: Rect,
    /// Status line.
    pub status: Rect,
}

/// Split the frame into home screen regions.
pub fn calculate_areas(area: Rect) -> HomeAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Length(CATEGORY_ROW_HEIGHT),
            Constraint::Length(CHIP_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    HomeAreas {
        search: chunks[0],
        categories: chunks[1],
        chips: chunks[2],
        grid: chunks[3],
        status: chunks[4],
    }
}

/// Render the home screen and any visible overlays.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let areas = calculate_areas(frame.area());
    let session = state.session();

    frame.render_widget(
        SearchBar::new(&state.search, state.focus == Focus::Search),
        areas.search,
    );
    frame.render_widget(
        CategoryRow::new(
            session.active_category(),
            state.category_cursor,
            state.focus == Focus::Categories,
        ),
        areas.categories,
    );
    frame.render_widget(
        FilterChips::new(
            session.filters(),
            state.chip_cursor,
            state.focus == Focus::Chips,
        ),
        areas.chips,
    );

    let geometry = state.geometry();
    frame.render_widget(ResultsGrid::new(state, &geometry), areas.grid);
    frame.render_widget(StatusBar::new(state), areas.status);

    if state.filter_modal.is_visible() {
        render_filter_sheet(frame, &state.filter_modal);
    }
    if let Some(detail) = &state.detail {
        render_detail(frame, detail, state.screen_viewport());
    }
    if state.help_visible {
        render_help_overlay(frame);
    }
    if let Some(toast) = state.toasts.current() {
        render_toast(frame, toast, frame.area());
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
