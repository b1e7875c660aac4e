//! Masonry results grid.
//!
//! Cards are drawn into a scratch buffer at full height and copied into the
//! frame row by row, so cards cut by the top or bottom edge clip cleanly.

use super::helpers::{compact_count, truncate_to_width};
use super::styles;
use crate::model::Hit;
use crate::state::{AppState, GridGeometry};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Results grid for the current session.
pub struct ResultsGrid<'a> {
    state: &'a AppState,
    geometry: &'a GridGeometry,
}

impl<'a> ResultsGrid<'a> {
    pub fn new(state: &'a AppState, geometry: &'a GridGeometry) -> Self {
        Self { state, geometry }
    }
}

impl Widget for ResultsGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.state.session();
        let hits = session.results().hits();

        if hits.is_empty() {
            let message = if session.is_loading() {
                "Loading…"
            } else {
                "No images found"
            };
            let top = area.y + area.height / 2;
            let line_area = Rect::new(area.x, top, area.width, area.height.min(1));
            Paragraph::new(Line::from(Span::styled(message, styles::MUTED_TEXT)))
                .alignment(Alignment::Center)
                .render(line_area, buf);
            return;
        }

        let offset = self.state.grid.offset();
        let selected = self.state.grid.selected();
        let column_width = self.geometry.column_width;
        if column_width == 0 {
            return;
        }

        for index in self
            .geometry
            .layout
            .visible(offset, u32::from(area.height))
        {
            let (Some(hit), Some(placement)) =
                (hits.get(index), self.geometry.layout.placements.get(index))
            else {
                continue;
            };
            let Ok(column) = u16::try_from(placement.column) else {
                continue;
            };
            let Ok(height) = u16::try_from(placement.height) else {
                continue;
            };

            let mut card = Buffer::empty(Rect::new(0, 0, column_width, height));
            Card::new(hit, index == selected).render(card.area, &mut card);

            let x = area.x + column * column_width;
            blit_rows(&card, buf, area, x, i64::from(placement.top) - i64::from(offset));
        }
    }
}

/// Copy `card` into `buf` with its top row at `area.y + top`, keeping only
/// rows inside `area`.
fn blit_rows(card: &Buffer, buf: &mut Buffer, area: Rect, x: u16, top: i64) {
    let card_area = card.area;
    for row in 0..card_area.height {
        let y = top + i64::from(row);
        if y < 0 || y >= i64::from(area.height) {
            continue;
        }
        let Ok(dest_y) = u16::try_from(y) else {
            continue;
        };
        let dest_y = area.y + dest_y;
        for col in 0..card_area.width {
            let dest_x = x + col;
            if dest_x >= area.right() {
                break;
            }
            buf[(dest_x, dest_y)] = card[(col, row)].clone();
        }
    }
}

// ===== Card =====

/// One image card: pixel size in the title, then tags, stats and author.
struct Card<'a> {
    hit: &'a Hit,
    selected: bool,
}

impl<'a> Card<'a> {
    fn new(hit: &'a Hit, selected: bool) -> Self {
        Self { hit, selected }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hit = self.hit;
        let border = if self.selected {
            styles::SELECTED_CARD
        } else {
            Style::new().fg(styles::orientation_color(hit.orientation()))
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {}×{} ", hit.image_width, hit.image_height));
        let inner = usize::from(area.width.saturating_sub(2));

        let tags = hit.tag_list().join(", ");
        let stats = format!(
            "♥ {}  ↓ {}",
            compact_count(hit.likes),
            compact_count(hit.downloads)
        );
        let mut lines = vec![
            Line::from(truncate_to_width(&tags, inner)),
            Line::from(Span::styled(truncate_to_width(&stats, inner), styles::MUTED_TEXT)),
        ];
        if !hit.user.is_empty() {
            let by = format!("by {}", hit.user);
            lines.push(Line::from(Span::styled(
                truncate_to_width(&by, inner),
                styles::MUTED_TEXT,
            )));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
