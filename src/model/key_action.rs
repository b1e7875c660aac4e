//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Grid scrolling
    /// Scroll the image grid up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the image grid down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the grid (header tap). Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the grid, triggering the next page. Default: G/End
    ScrollToBottom,

    // Selection
    /// Select the previous image. Default: h/←
    SelectPrev,
    /// Select the next image. Default: l/→
    SelectNext,
    /// Open the selected image in the detail view, or activate the focused item. Default: Enter
    Activate,

    // Focus
    /// Cycle focus: Grid → Categories → Filter chips. Default: Tab
    CycleFocus,
    /// Focus the search input. Default: / or Ctrl+f
    StartSearch,
    /// Leave the current input / close the current overlay. Default: Esc
    Cancel,

    // Filters
    /// Open the filter sheet. Default: f
    OpenFilters,
    /// Clear the focused filter chip. Default: x/Delete
    ClearFilter,
    /// Apply the filter sheet draft. Default: a
    ApplyFilters,
    /// Reset all filters from the filter sheet. Default: r
    ResetFilters,

    // Detail view
    /// Download the image shown in the detail view. Default: d
    Download,
    /// Share (copy link of) the image shown in the detail view. Default: s
    Share,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
