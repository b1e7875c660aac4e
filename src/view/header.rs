//! Home screen header: search bar, category row and active filter chips.

use super::styles;
use crate::model::{Category, FilterSet};
use crate::state::{AppState, Focus, SearchInput};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const SEARCH_PLACEHOLDER: &str = "Search images";

// ===== Search bar =====

/// Search bar widget. Shows a block cursor while focused.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(input: &'a SearchInput, focused: bool) -> Self {
        Self { input, focused }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.input.text();
        let line = if self.focused {
            let cursor = self.input.cursor();
            let before: String = text.chars().take(cursor).collect();
            let mut rest = text.chars().skip(cursor);
            let at_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
            let after: String = rest.collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(at_cursor, styles::TEXT_CURSOR),
                Span::raw(after),
            ])
        } else if text.is_empty() {
            Line::from(Span::styled(SEARCH_PLACEHOLDER, styles::MUTED_TEXT))
        } else {
            Line::from(text)
        };

        let border = if self.focused {
            styles::FOCUSED_BORDER
        } else {
            styles::UNFOCUSED_BORDER
        };
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search ")
                    .border_style(border),
            )
            .render(area, buf);
    }
}

// ===== Category row =====

/// Horizontal category chips, scrolled so the cursor stays visible.
pub struct CategoryRow {
    active: Option<Category>,
    cursor: usize,
    focused: bool,
}

impl CategoryRow {
    pub fn new(active: Option<Category>, cursor: usize, focused: bool) -> Self {
        Self {
            active,
            cursor,
            focused,
        }
    }
}

/// First chip index so that chips `first..=cursor` fit in `width` cells.
fn first_visible(labels: &[String], cursor: usize, width: usize) -> usize {
    let cursor = cursor.min(labels.len().saturating_sub(1));
    let mut used = 0;
    let mut first = cursor + 1;
    while first > 0 {
        let w = labels[first - 1].width() + 1;
        if used + w > width && first <= cursor {
            break;
        }
        used += w;
        first -= 1;
    }
    first
}

impl Widget for CategoryRow {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<String> = Category::ALL
            .iter()
            .map(|c| format!(" {} ", c.as_str()))
            .collect();
        let first = first_visible(&labels, self.cursor, usize::from(area.width));

        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate().skip(first) {
            let category = Category::ALL[i];
            let style = if self.focused && i == self.cursor {
                styles::CURSOR_CHIP
            } else if self.active == Some(category) {
                styles::ACTIVE_CHIP
            } else {
                styles::IDLE_CHIP
            };
            spans.push(Span::styled(label.clone(), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

// ===== Filter chips =====

/// Active filters as removable chips.
pub struct FilterChips<'a> {
    filters: &'a FilterSet,
    cursor: usize,
    focused: bool,
}

impl<'a> FilterChips<'a> {
    pub fn new(filters: &'a FilterSet, cursor: usize, focused: bool) -> Self {
        Self {
            filters,
            cursor,
            focused,
        }
    }
}

impl Widget for FilterChips<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.filters.is_empty() {
            let hint = Span::styled("No filters (f to add)", styles::MUTED_TEXT);
            Paragraph::new(Line::from(hint)).render(area, buf);
            return;
        }

        let mut spans = vec![Span::styled("Filters: ", styles::MUTED_TEXT)];
        for (i, (key, value)) in self.filters.iter().enumerate() {
            let style = if self.focused && i == self.cursor {
                styles::CURSOR_CHIP
            } else {
                styles::ACTIVE_CHIP
            };
            spans.push(Span::styled(format!(" {key}: {value} × "), style));
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

// ===== Status bar =====

/// One-line status: result count, loading state and key hints.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.state.session();
        let results = session.results();

        let count = match results.total_hits() {
            Some(total) => format!("{} of {} images", results.len(), total),
            None => format!("{} images", results.len()),
        };
        let activity = if session.is_loading_more() {
            " · loading more…"
        } else if session.is_loading() {
            " · loading…"
        } else {
            ""
        };
        let focus = match self.state.focus {
            Focus::Grid => "grid",
            Focus::Search => "search",
            Focus::Categories => "categories",
            Focus::Chips => "filters",
        };

        let left = format!(" {count}{activity}");
        let right = format!("[{focus}] ? help  q quit ");
        let gap = usize::from(area.width)
            .saturating_sub(left.width() + right.width())
            .max(1);
        let line = Line::from(vec![
            Span::raw(left),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, styles::MUTED_TEXT),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
