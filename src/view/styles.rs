//! Shared styles.

use ratatui::style::{Color, Modifier, Style};

/// Section headers in overlays.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Hints and secondary text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Key names in the help overlay and status bar.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Border of the focused region.
pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);

/// Border of unfocused regions.
pub const UNFOCUSED_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Chip under the keyboard cursor.
pub const CURSOR_CHIP: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Chip whose value is active (selected category, chosen filter option).
pub const ACTIVE_CHIP: Style = Style::new().fg(Color::Black).bg(Color::Yellow);

/// Chip that is neither active nor under the cursor.
pub const IDLE_CHIP: Style = Style::new().fg(Color::Gray);

/// Selected grid card border.
pub const SELECTED_CARD: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Success notification.
pub const TOAST: Style = Style::new().fg(Color::Black).bg(Color::Green);

/// Text cursor in the search bar.
pub const TEXT_CURSOR: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::White)
    .add_modifier(Modifier::BOLD);

/// Card border color per orientation bucket.
pub fn orientation_color(orientation: crate::model::Orientation) -> Color {
    use crate::model::Orientation;
    match orientation {
        Orientation::Landscape => Color::Blue,
        Orientation::Portrait => Color::Magenta,
        Orientation::Square => Color::Green,
    }
}
