//! Filter sheet overlay: one row of option chips per filter dimension.

use super::constants::{FILTER_SHEET_HEIGHT, FILTER_SHEET_WIDTH_PERCENT};
use super::helpers::centered_rect;
use super::styles;
use crate::model::FilterKey;
use crate::state::FilterModal;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the filter sheet centered on the screen.
pub fn render_filter_sheet(frame: &mut Frame, modal: &FilterModal) {
    let popup_area = centered_rect(FILTER_SHEET_WIDTH_PERCENT, FILTER_SHEET_HEIGHT, frame.area());
    frame.render_widget(Clear, popup_area);

    let sheet = Paragraph::new(build_sheet_lines(modal))
        .block(
            Block::default()
                .title(" Filters ")
                .borders(Borders::ALL)
                .border_style(styles::FOCUSED_BORDER),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(sheet, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Enter select · a apply · r reset · Esc close ",
        styles::MUTED_TEXT,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// One header line and one chip line per dimension.
fn build_sheet_lines(modal: &FilterModal) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(FilterKey::ALL.len() * 2);
    for key in FilterKey::ALL {
        let current_section = key == modal.section();
        lines.push(Line::from(Span::styled(key.title(), styles::SECTION_HEADER)));

        let mut chips = Vec::with_capacity(key.options().len() * 2);
        for (i, option) in key.options().iter().enumerate() {
            let style = if current_section && i == modal.option() {
                styles::CURSOR_CHIP
            } else if modal.is_selected(key, option) {
                styles::ACTIVE_CHIP
            } else {
                styles::IDLE_CHIP
            };
            chips.push(Span::styled(format!(" {option} "), style));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));
    }
    lines
}
