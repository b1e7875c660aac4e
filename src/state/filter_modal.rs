//! State for the filter sheet.
//!
//! The sheet edits a draft copy of the active filters. Nothing reaches the
//! session until the draft is applied; closing discards it.

use crate::model::{FilterKey, FilterSet};

/// Outcome of confirming the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    /// Hand the draft to the session.
    Apply(FilterSet),
    /// Drop every active filter.
    Reset,
}

/// Filter sheet state.
///
/// The cursor addresses one option chip: a section (filter dimension, in
/// [`FilterKey::ALL`] order) and an option within it.
#[derive(Debug, Clone, Default)]
pub struct FilterModal {
    visible: bool,
    draft: FilterSet,
    section: usize,
    option: usize,
}

impl FilterModal {
    /// Closed sheet with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the sheet is open.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open with a copy of the currently active filters.
    pub fn open(&mut self, active: &FilterSet) {
        self.visible = true;
        self.draft = active.clone();
        self.section = 0;
        self.option = 0;
    }

    /// Close without applying.
    pub fn close(&mut self) {
        self.visible = false;
        self.draft.clear();
    }

    /// Filters picked so far.
    pub fn draft(&self) -> &FilterSet {
        &self.draft
    }

    /// Filter dimension under the cursor.
    pub fn section(&self) -> FilterKey {
        FilterKey::ALL[self.section]
    }

    /// Option index under the cursor, within [`FilterModal::section`].
    pub fn option(&self) -> usize {
        self.option
    }

    // ===== Cursor =====

    /// Move to the previous section.
    pub fn prev_section(&mut self) {
        self.section = self.section.saturating_sub(1);
        self.clamp_option();
    }

    /// Move to the next section.
    pub fn next_section(&mut self) {
        self.section = (self.section + 1).min(FilterKey::ALL.len() - 1);
        self.clamp_option();
    }

    /// Move to the previous option of the section.
    pub fn prev_option(&mut self) {
        self.option = self.option.saturating_sub(1);
    }

    /// Move to the next option of the section.
    pub fn next_option(&mut self) {
        let last = self.section().options().len().saturating_sub(1);
        self.option = (self.option + 1).min(last);
    }

    fn clamp_option(&mut self) {
        let last = self.section().options().len().saturating_sub(1);
        self.option = self.option.min(last);
    }

    // ===== Editing =====

    /// Set the draft value of the current section to the option under the
    /// cursor. Selecting never unsets a dimension.
    pub fn select(&mut self) {
        let key = self.section();
        if let Some(value) = key.options().get(self.option) {
            self.draft.set(key, *value);
        }
    }

    /// Whether the chip at `(key, option)` is selected in the draft.
    pub fn is_selected(&self, key: FilterKey, option: &str) -> bool {
        self.draft.get(key) == Some(option)
    }

    /// Close and hand the draft over for applying.
    pub fn apply(&mut self) -> FilterCommand {
        let draft = std::mem::take(&mut self.draft);
        self.visible = false;
        FilterCommand::Apply(draft)
    }

    /// Clear the draft, close, and ask for a reset.
    pub fn reset(&mut self) -> FilterCommand {
        self.close();
        FilterCommand::Reset
    }
}
