//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search bar in lines (border + content).
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the category chip row.
pub const CATEGORY_ROW_HEIGHT: u16 = 1;

/// Height of the active filter chip row.
pub const CHIP_ROW_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the filter sheet.
pub const FILTER_SHEET_WIDTH_PERCENT: u16 = 60;

/// Height of the filter sheet: a title and a chip row per dimension, room
/// for the colors row to wrap once, and borders.
pub const FILTER_SHEET_HEIGHT: u16 = 12;

/// Rows the detail popup reserves under the image box for metadata.
pub const DETAIL_INFO_ROWS: u16 = 6;

/// Event poll timeout. Drives debounce, toast expiry and worker draining.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
