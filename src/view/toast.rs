//! Toast notification drawn above the status bar.

use super::styles;
use crate::state::Toast;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render `toast` right-aligned on the row above the bottom of `area`.
pub fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let text = format!(" {} ", toast.message());
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX).min(area.width);
    if width == 0 || area.height < 2 {
        return;
    }
    let toast_area = Rect {
        x: area.right() - width - area.width.saturating_sub(width).min(1),
        y: area.bottom() - 2,
        width,
        height: 1,
    };
    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles::TOAST))),
        toast_area,
    );
}
