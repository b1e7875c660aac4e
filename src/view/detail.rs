//! Image detail overlay.
//!
//! The image box is sized in logical pixels by the detail state and
//! converted to cells here. Metadata and action hints sit below it.

use super::constants::DETAIL_INFO_ROWS;
use super::helpers::{compact_count, truncate_to_width};
use super::styles;
use crate::layout::Viewport;
use crate::state::grid::{PX_PER_COL, PX_PER_ROW};
use crate::state::{DetailState, DetailStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Image box size in cells for `detail` on a `screen` viewport.
pub fn image_box_cells(detail: &DetailState, screen: Viewport) -> (u16, u16) {
    let size = detail.box_size(screen);
    let cols = (size.width / f64::from(PX_PER_COL)).round();
    let rows = (size.height / f64::from(PX_PER_ROW)).round();
    (to_cells(cols), to_cells(rows))
}

fn to_cells(value: f64) -> u16 {
    if value.is_finite() && value >= 1.0 {
        value.min(f64::from(u16::MAX)) as u16
    } else {
        1
    }
}

/// Render the detail overlay centered on the screen.
pub fn render_detail(frame: &mut Frame, detail: &DetailState, screen: Viewport) {
    let area = frame.area();
    let (box_cols, box_rows) = image_box_cells(detail, screen);
    let width = (box_cols + 2).min(area.width);
    let height = box_rows
        .saturating_add(DETAIL_INFO_ROWS + 2)
        .min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup_area);

    let hit = detail.hit();
    let outer = Block::default()
        .title(format!(" Image #{} ", hit.id))
        .borders(Borders::ALL)
        .border_style(styles::FOCUSED_BORDER);
    let inner = outer.inner(popup_area);
    frame.render_widget(outer, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(DETAIL_INFO_ROWS)])
        .split(inner);

    render_image_box(frame, chunks[0], detail);
    frame.render_widget(Paragraph::new(info_lines(detail, inner.width)), chunks[1]);
}

/// Placeholder for the image: dimensions and source URL inside a frame
/// colored by orientation.
fn render_image_box(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let hit = detail.hit();
    let color = styles::orientation_color(hit.orientation());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(color));
    let text_width = usize::from(area.width.saturating_sub(2));

    let body = if detail.status() == DetailStatus::Loading {
        vec![Line::from(Span::styled("Loading…", styles::MUTED_TEXT))]
    } else {
        vec![
            Line::from(format!("{} × {}", hit.image_width, hit.image_height)),
            Line::from(Span::styled(
                truncate_to_width(&hit.webformat_url, text_width),
                styles::MUTED_TEXT,
            )),
        ]
    };
    let top_pad = usize::from(area.height.saturating_sub(2)).saturating_sub(body.len()) / 2;
    let mut lines = vec![Line::default(); top_pad];
    lines.extend(body);

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn info_lines(detail: &DetailState, width: u16) -> Vec<Line<'static>> {
    let hit = detail.hit();
    let width = usize::from(width);

    let tags = truncate_to_width(&hit.tag_list().join(", "), width);
    let stats = format!(
        "♥ {}  ↓ {}  👁 {}",
        compact_count(hit.likes),
        compact_count(hit.downloads),
        compact_count(hit.views)
    );
    let author = if hit.user.is_empty() {
        String::new()
    } else {
        truncate_to_width(&format!("by {}", hit.user), width)
    };
    let save_to = truncate_to_width(&format!("→ {}", detail.file_path().display()), width);

    vec![
        Line::from(tags),
        Line::from(Span::styled(stats, styles::MUTED_TEXT)),
        Line::from(Span::styled(author, styles::MUTED_TEXT)),
        Line::from(Span::styled(save_to, styles::MUTED_TEXT)),
        Line::default(),
        status_line(detail.status()),
    ]
}

fn status_line(status: DetailStatus) -> Line<'static> {
    match status {
        DetailStatus::Loading => Line::from(Span::styled("Loading…", styles::MUTED_TEXT)),
        DetailStatus::Downloading => Line::from(Span::styled("Downloading…", styles::MUTED_TEXT)),
        DetailStatus::Sharing => Line::from(Span::styled("Copying link…", styles::MUTED_TEXT)),
        DetailStatus::Idle => Line::from(vec![
            Span::styled("d", styles::KEY_HINT),
            Span::raw(" download  "),
            Span::styled("s", styles::KEY_HINT),
            Span::raw(" share  "),
            Span::styled("Esc", styles::KEY_HINT),
            Span::raw(" back"),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hit::fixtures::hit;
    use crate::state::grid::viewport_for_cells;
    use crate::view::helpers::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::Path;

    fn render(detail: &DetailState, cols: u16, rows: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        let screen = viewport_for_cells(cols, rows);
        terminal
            .draw(|frame| render_detail(frame, detail, screen))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn desktop_box_is_half_the_width() {
        let detail = DetailState::open(hit(1, 640, 480), Path::new("/tmp"));
        // 160 cols = 1280 px, desktop: 640 px wide, 480 px tall
        let (cols, rows) = image_box_cells(&detail, viewport_for_cells(160, 50));
        assert_eq!((cols, rows), (80, 24));
    }

    #[test]
    fn narrow_box_uses_most_of_the_width() {
        let detail = DetailState::open(hit(1, 640, 640), Path::new("/tmp"));
        // 80 cols = 640 px, 92% = 588.8 px
        let (cols, rows) = image_box_cells(&detail, viewport_for_cells(80, 24));
        assert_eq!(cols, 74);
        assert_eq!(rows, 29);
    }

    #[test]
    fn loading_detail_hides_actions() {
        let detail = DetailState::open(hit(1, 640, 480), Path::new("/tmp"));
        let out = render(&detail, 100, 40);
        assert!(out.contains("Image #1"));
        assert!(out.contains("Loading…"));
        assert!(!out.contains("download"));
    }

    #[test]
    fn idle_detail_shows_actions_and_destination() {
        let mut detail = DetailState::open(hit(1, 640, 480), Path::new("/tmp"));
        detail.mark_rendered();
        let out = render(&detail, 100, 40);
        assert!(out.contains("d download"));
        assert!(out.contains("s share"));
        assert!(out.contains("/tmp/1_150.jpg"));
    }

    #[test]
    fn tall_image_is_clamped_to_screen() {
        let detail = DetailState::open(hit(1, 300, 3000), Path::new("/tmp"));
        // must not panic when the box is taller than the terminal
        let out = render(&detail, 60, 20);
        assert!(out.contains("Image #1"));
    }
}
