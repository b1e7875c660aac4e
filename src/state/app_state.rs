//! Application state and transitions.
//!
//! `AppState` is the root of all UI state. Key actions and worker results
//! are applied here as plain method calls that return the side effect the
//! shell must perform, if any. Nothing in this module touches the terminal,
//! the network or the clock; `now` is always passed in.

use crate::api::SearchResponse;
use crate::layout::Viewport;
use crate::model::{Category, FetchError, FilterKey, KeyAction, MergeMode, PlatformError};
use crate::platform::PlatformJob;
use crate::state::detail::DetailState;
use crate::state::filter_modal::{FilterCommand, FilterModal};
use crate::state::grid::{viewport_for_cells, GridGeometry, GridState};
use crate::state::search_input::{self, SearchInput};
use crate::state::session::{FetchRequest, ResponseDisposition, Session};
use crate::state::toast::Toasts;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

// ===== Effect =====

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run a search request on the fetch worker.
    Fetch(FetchRequest),
    /// Run a download or clipboard job on the platform worker.
    Platform(PlatformJob),
    /// Leave the application.
    Quit,
}

// ===== Focus =====

/// Home screen region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Results grid.
    #[default]
    Grid,
    /// Text input in the search bar.
    Search,
    /// Category chip row.
    Categories,
    /// Active filter chips.
    Chips,
}

// ===== AppState =====

/// Root UI state.
///
/// Overlays stack in a fixed priority: help, then the detail view, then the
/// filter sheet. The topmost visible overlay receives every key action.
#[derive(Debug, Clone)]
pub struct AppState {
    session: Session,
    /// Search bar text and debounce timer.
    pub search: SearchInput,
    /// Region receiving keys.
    pub focus: Focus,
    /// Grid scroll offset and selection.
    pub grid: GridState,
    /// Highlighted chip in the category row, index into [`Category::ALL`].
    pub category_cursor: usize,
    /// Highlighted active-filter chip.
    pub chip_cursor: usize,
    /// Filter sheet overlay.
    pub filter_modal: FilterModal,
    /// Open detail view, if any.
    pub detail: Option<DetailState>,
    /// Help overlay shown.
    pub help_visible: bool,
    /// Pending success notifications.
    pub toasts: Toasts,
    screen: (u16, u16),
    grid_area: (u16, u16),
    download_dir: PathBuf,
    debounce: Duration,
}

impl AppState {
    /// State for `session`; downloads go to `download_dir`.
    pub fn new(session: Session, download_dir: PathBuf, debounce: Duration) -> Self {
        let search = SearchInput::with_text(session.search_text());
        let category_cursor = session.active_category().map_or(0, Category::index);
        Self {
            session,
            search,
            focus: Focus::Grid,
            grid: GridState::new(),
            category_cursor,
            chip_cursor: 0,
            filter_modal: FilterModal::new(),
            detail: None,
            help_visible: false,
            toasts: Toasts::new(),
            screen: (0, 0),
            grid_area: (0, 0),
            download_dir,
            debounce,
        }
    }

    /// Pagination controller.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// First fetch after mount.
    pub fn start(&mut self) -> Effect {
        let request = self.session.initial_fetch();
        self.fetch(request)
    }

    // ===== Geometry =====

    /// Record terminal and grid area sizes (in cells) from the last draw.
    pub fn set_viewport(&mut self, screen: (u16, u16), grid_area: (u16, u16)) {
        self.screen = screen;
        self.grid_area = grid_area;
    }

    /// Terminal size in logical pixels.
    pub fn screen_viewport(&self) -> Viewport {
        viewport_for_cells(self.screen.0, self.screen.1)
    }

    /// Height of the grid area in rows.
    pub fn grid_rows(&self) -> u16 {
        self.grid_area.1
    }

    /// Card placement for the current results and grid area.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::compute(
            self.session.results().hits(),
            self.grid_area.0,
            self.screen_viewport(),
        )
    }

    // ===== Key actions =====

    /// Apply a key action.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<Effect> {
        if action == KeyAction::Quit {
            return Some(Effect::Quit);
        }
        if self.help_visible {
            if matches!(action, KeyAction::Help | KeyAction::Cancel) {
                self.help_visible = false;
            }
            return None;
        }
        if action == KeyAction::Help {
            self.help_visible = true;
            return None;
        }
        if self.detail.is_some() {
            return self.handle_detail_action(action);
        }
        if self.filter_modal.is_visible() {
            return self.handle_filter_action(action);
        }

        match action {
            KeyAction::OpenFilters => {
                self.filter_modal.open(self.session.filters());
                None
            }
            KeyAction::StartSearch => {
                self.focus = Focus::Search;
                None
            }
            KeyAction::CycleFocus => {
                self.focus = match self.focus {
                    Focus::Grid => Focus::Categories,
                    Focus::Categories => Focus::Chips,
                    Focus::Chips | Focus::Search => Focus::Grid,
                };
                None
            }
            KeyAction::Cancel => {
                self.focus = Focus::Grid;
                None
            }
            _ => match self.focus {
                Focus::Grid | Focus::Search => self.handle_grid_action(action),
                Focus::Categories => self.handle_category_action(action),
                Focus::Chips => self.handle_chip_action(action),
            },
        }
    }

    fn handle_grid_action(&mut self, action: KeyAction) -> Option<Effect> {
        let geometry = self.geometry();
        let rows = self.grid_rows();
        let page = i64::from(rows.max(1));
        match action {
            KeyAction::ScrollUp => self.grid.scroll_by(-1, &geometry, rows),
            KeyAction::ScrollDown => self.grid.scroll_by(1, &geometry, rows),
            KeyAction::PageUp => self.grid.scroll_by(-page, &geometry, rows),
            KeyAction::PageDown => self.grid.scroll_by(page, &geometry, rows),
            KeyAction::ScrollToTop => self.grid.scroll_to_top(),
            KeyAction::ScrollToBottom => self.grid.scroll_to_bottom(&geometry, rows),
            KeyAction::SelectPrev => self.grid.select_prev(&geometry, rows),
            KeyAction::SelectNext => {
                let count = self.session.results().len();
                self.grid.select_next(count, &geometry, rows);
            }
            KeyAction::Activate => {
                self.open_detail();
                return None;
            }
            _ => return None,
        }
        self.check_scroll(&geometry)
    }

    fn handle_category_action(&mut self, action: KeyAction) -> Option<Effect> {
        let last = Category::ALL.len() - 1;
        match action {
            KeyAction::SelectPrev | KeyAction::ScrollUp => {
                self.category_cursor = self.category_cursor.saturating_sub(1);
                None
            }
            KeyAction::SelectNext | KeyAction::ScrollDown => {
                self.category_cursor = (self.category_cursor + 1).min(last);
                None
            }
            KeyAction::Activate => {
                let category = Category::ALL[self.category_cursor.min(last)];
                let request = self.session.change_category(category);
                self.search = SearchInput::new();
                Some(self.fetch(request))
            }
            _ => None,
        }
    }

    fn handle_chip_action(&mut self, action: KeyAction) -> Option<Effect> {
        let count = self.session.filters().len();
        match action {
            KeyAction::SelectPrev | KeyAction::ScrollUp => {
                self.chip_cursor = self.chip_cursor.saturating_sub(1);
                None
            }
            KeyAction::SelectNext | KeyAction::ScrollDown => {
                self.chip_cursor = (self.chip_cursor + 1).min(count.saturating_sub(1));
                None
            }
            KeyAction::Activate | KeyAction::ClearFilter => {
                let key = self.focused_chip()?;
                let request = self.session.clear_filter(key);
                let remaining = self.session.filters().len();
                self.chip_cursor = self.chip_cursor.min(remaining.saturating_sub(1));
                if remaining == 0 {
                    self.focus = Focus::Grid;
                }
                Some(self.fetch(request))
            }
            _ => None,
        }
    }

    /// Filter dimension of the highlighted chip.
    pub fn focused_chip(&self) -> Option<FilterKey> {
        self.session
            .filters()
            .iter()
            .nth(self.chip_cursor)
            .map(|(key, _)| key)
    }

    fn handle_filter_action(&mut self, action: KeyAction) -> Option<Effect> {
        let command = match action {
            KeyAction::ScrollUp => {
                self.filter_modal.prev_section();
                return None;
            }
            KeyAction::ScrollDown | KeyAction::CycleFocus => {
                self.filter_modal.next_section();
                return None;
            }
            KeyAction::SelectPrev => {
                self.filter_modal.prev_option();
                return None;
            }
            KeyAction::SelectNext => {
                self.filter_modal.next_option();
                return None;
            }
            KeyAction::Activate => {
                self.filter_modal.select();
                return None;
            }
            KeyAction::Cancel | KeyAction::OpenFilters => {
                self.filter_modal.close();
                return None;
            }
            KeyAction::ApplyFilters => self.filter_modal.apply(),
            KeyAction::ResetFilters => self.filter_modal.reset(),
            _ => return None,
        };

        let request = match command {
            FilterCommand::Apply(filters) => self.session.apply_filters(filters),
            FilterCommand::Reset => self.session.reset_filters(),
        };
        self.chip_cursor = 0;
        request.map(|r| self.fetch(r))
    }

    fn handle_detail_action(&mut self, action: KeyAction) -> Option<Effect> {
        let detail = self.detail.as_mut()?;
        match action {
            KeyAction::Download => detail.start_download().map(Effect::Platform),
            KeyAction::Share => detail.start_share().map(Effect::Platform),
            KeyAction::Cancel => {
                self.detail = None;
                None
            }
            _ => None,
        }
    }

    fn open_detail(&mut self) {
        if let Some(hit) = self.session.results().hits().get(self.grid.selected()) {
            self.detail = Some(DetailState::open(hit.clone(), &self.download_dir));
        }
    }

    /// The view drew a frame; the detail image counts as loaded.
    pub fn mark_rendered(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.mark_rendered();
        }
    }

    // ===== Search input =====

    /// Insert `ch` at the cursor and restart the debounce.
    pub fn type_char(&mut self, ch: char, now: Instant) {
        let input = std::mem::take(&mut self.search);
        self.search = search_input::handle_char_input(input, ch, now);
    }

    /// Delete before the cursor and restart the debounce.
    pub fn backspace(&mut self, now: Instant) {
        let input = std::mem::take(&mut self.search);
        self.search = search_input::handle_backspace(input, now);
    }

    /// Move the search cursor left.
    pub fn cursor_left(&mut self) {
        let input = std::mem::take(&mut self.search);
        self.search = search_input::handle_cursor_left(input);
    }

    /// Move the search cursor right.
    pub fn cursor_right(&mut self) {
        let input = std::mem::take(&mut self.search);
        self.search = search_input::handle_cursor_right(input);
    }

    /// Empty the search bar and search immediately.
    pub fn clear_search(&mut self) -> Option<Effect> {
        let input = std::mem::take(&mut self.search);
        self.search = search_input::clear_input(input);
        let request = self.session.search("")?;
        Some(self.fetch(request))
    }

    /// Search the current text now, skipping the debounce, and return to
    /// the grid.
    pub fn submit_search(&mut self, now: Instant) -> Option<Effect> {
        self.focus = Focus::Grid;
        let text = self.search.take_due(now, Duration::ZERO)?;
        self.run_search(&text)
    }

    fn run_search(&mut self, text: &str) -> Option<Effect> {
        let request = self.session.search(text)?;
        Some(self.fetch(request))
    }

    // ===== Ticks and worker results =====

    /// Periodic housekeeping: expire toasts and fire a due search.
    pub fn tick(&mut self, now: Instant) -> Option<Effect> {
        self.toasts.prune(now);
        let text = self.search.take_due(now, self.debounce)?;
        self.run_search(&text)
    }

    /// Apply a settled fetch. May ask for the next page when the grid is
    /// still not filled past the bottom.
    pub fn apply_fetch(
        &mut self,
        seq: u64,
        outcome: Result<SearchResponse, FetchError>,
    ) -> Option<Effect> {
        match self.session.apply_response(seq, outcome) {
            ResponseDisposition::Merged { added } => {
                self.grid.clamp_selection(self.session.results().len());
                if added == 0 {
                    return None;
                }
                let geometry = self.geometry();
                self.check_scroll(&geometry)
            }
            ResponseDisposition::Failed | ResponseDisposition::Stale => None,
        }
    }

    /// Apply a settled platform job.
    pub fn apply_platform(
        &mut self,
        job: &PlatformJob,
        result: Result<(), PlatformError>,
        now: Instant,
    ) {
        match self.detail.as_mut() {
            Some(detail) => {
                if let Some(message) = detail.settle(job, result) {
                    self.toasts.push(message, now);
                }
            }
            None => debug!(?job, "platform job settled after detail closed"),
        }
    }

    // ===== Internals =====

    fn check_scroll(&mut self, geometry: &GridGeometry) -> Option<Effect> {
        if self.grid_area.1 == 0 {
            return None;
        }
        let metrics = self.grid.metrics(geometry, self.grid_area.1);
        let request = self.session.on_scroll(metrics)?;
        Some(self.fetch(request))
    }

    fn fetch(&mut self, request: FetchRequest) -> Effect {
        if request.mode == MergeMode::Replace {
            self.grid.reset();
        }
        Effect::Fetch(request)
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
