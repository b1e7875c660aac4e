//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::centered_rect;
use super::styles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let height = area.height * HELP_POPUP_HEIGHT_PERCENT / 100;
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, height, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles::FOCUSED_BORDER),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: popup_area.height.min(1),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

fn shortcut(keys: &'static str, description: &'static str) -> Line<'static> {
    let desc_style = Style::default().fg(Color::White);
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), styles::KEY_HINT),
        Span::styled(description, desc_style),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(title, styles::SECTION_HEADER)])
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    vec![
        section("Grid"),
        shortcut("j/k ↓/↑", "Scroll"),
        shortcut("h/l ←/→", "Previous / next image"),
        shortcut("Ctrl+d/u PgDn/Up", "Page down / up"),
        shortcut("g/G Home/End", "Top / bottom"),
        shortcut("Enter/Space", "Open image"),
        Line::default(),
        section("Search"),
        shortcut("/ Ctrl+f", "Focus search bar"),
        shortcut("Enter", "Search now"),
        shortcut("Ctrl+u", "Clear search"),
        shortcut("Esc", "Back to grid"),
        Line::default(),
        section("Categories and filters"),
        shortcut("Tab", "Cycle grid / categories / filter chips"),
        shortcut("Enter", "Pick category, remove filter chip"),
        shortcut("x Delete", "Remove filter chip"),
        shortcut("f", "Open filter sheet"),
        shortcut("a / r", "Apply / reset filters (in sheet)"),
        Line::default(),
        section("Image"),
        shortcut("d", "Download"),
        shortcut("s", "Copy link"),
        shortcut("Esc", "Close"),
        Line::default(),
        section("Application"),
        shortcut("?", "Toggle this help"),
        shortcut("q Ctrl+c", "Quit"),
    ]
}
