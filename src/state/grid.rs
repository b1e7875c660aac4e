//! Results grid: masonry geometry in terminal cells, scroll offset and
//! selection.
//!
//! Layout math works in logical pixels; one terminal column counts as
//! [`PX_PER_COL`] pixels and one row as [`PX_PER_ROW`].

use crate::layout::{column_count, item_height, masonry, MasonryLayout, Viewport};
use crate::model::Hit;
use crate::state::session::ScrollMetrics;

/// Logical pixels per terminal column.
pub const PX_PER_COL: u16 = 8;

/// Logical pixels per terminal row.
pub const PX_PER_ROW: u16 = 20;

/// Blank rows between stacked cards.
pub const CARD_GAP_ROWS: u32 = 1;

/// Viewport in logical pixels for an area of `cols` x `rows` cells.
pub fn viewport_for_cells(cols: u16, rows: u16) -> Viewport {
    Viewport::new(
        f64::from(cols) * f64::from(PX_PER_COL),
        f64::from(rows) * f64::from(PX_PER_ROW),
    )
}

/// Card placement for a grid area, in rows and columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width of one grid column in cells.
    pub column_width: u16,
    /// Card placement in rows.
    pub layout: MasonryLayout,
}

impl GridGeometry {
    /// Lay out `hits` for an area of `cols` x `rows` cells.
    ///
    /// The column count comes from the terminal size as a whole (`screen`),
    /// not just the grid area.
    pub fn compute(hits: &[Hit], cols: u16, screen: Viewport) -> Self {
        let columns = column_count(screen.width, screen.height);
        let heights: Vec<u32> = hits
            .iter()
            .map(|h| {
                let px = item_height(h.image_height, h.image_width);
                (px / u32::from(PX_PER_ROW)).max(1)
            })
            .collect();
        Self {
            column_width: cols / columns.max(1),
            layout: masonry(&heights, usize::from(columns), CARD_GAP_ROWS),
        }
    }

    /// Rows from the first card to the bottom of the tallest column.
    pub fn content_height(&self) -> u32 {
        self.layout.content_height
    }
}

/// Scroll offset and selected card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    offset: u32,
    selected: usize,
}

impl GridState {
    /// Top of the grid, first card selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Index of the selected hit.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Back to the top with the first card selected (after a replace).
    pub fn reset(&mut self) {
        self.offset = 0;
        self.selected = 0;
    }

    /// Scroll position as seen by the pagination trigger.
    pub fn metrics(&self, geometry: &GridGeometry, viewport_rows: u16) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            viewport_height: u32::from(viewport_rows),
            content_height: geometry.content_height(),
        }
    }

    fn max_offset(geometry: &GridGeometry, viewport_rows: u16) -> u32 {
        geometry
            .content_height()
            .saturating_sub(u32::from(viewport_rows))
    }

    // ===== Scrolling =====

    /// Scroll by `delta` rows, clamped to the content.
    pub fn scroll_by(&mut self, delta: i64, geometry: &GridGeometry, viewport_rows: u16) {
        let max = i64::from(Self::max_offset(geometry, viewport_rows));
        let next = (i64::from(self.offset) + delta).clamp(0, max);
        self.offset = u32::try_from(next).unwrap_or(0);
    }

    /// Jump to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last row is visible.
    pub fn scroll_to_bottom(&mut self, geometry: &GridGeometry, viewport_rows: u16) {
        self.offset = Self::max_offset(geometry, viewport_rows);
    }

    // ===== Selection =====

    /// Select the previous card and keep it in view.
    pub fn select_prev(&mut self, geometry: &GridGeometry, viewport_rows: u16) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_visible(geometry, viewport_rows);
    }

    /// Select the next card of `count` and keep it in view.
    pub fn select_next(&mut self, count: usize, geometry: &GridGeometry, viewport_rows: u16) {
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
        self.ensure_visible(geometry, viewport_rows);
    }

    /// Keep the selection within range after the result set changed.
    pub fn clamp_selection(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Scroll just enough for the selected card to be fully on screen.
    pub fn ensure_visible(&mut self, geometry: &GridGeometry, viewport_rows: u16) {
        let Some(placement) = geometry.layout.placements.get(self.selected) else {
            return;
        };
        let rows = u32::from(viewport_rows);
        if placement.top < self.offset {
            self.offset = placement.top;
        } else if placement.bottom() > self.offset + rows {
            self.offset = placement.bottom().saturating_sub(rows);
        }
    }
}
