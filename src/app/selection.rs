//! Keyboard and pointer selection over the bounded result list.
//!
//! [`SelectionController`] owns a single [`Selection`] and applies the
//! circular navigation rules. The controller never stores the result list
//! itself; every operation takes the current result count `n`, so a selection
//! can only ever be produced for an index that is valid at that moment.

use super::modes::Selection;

/// Circular selection state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selection: Selection::Unselected,
        }
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Moves to the next result, wrapping to the first.
    ///
    /// From `Unselected` the first result becomes selected. No-op when there
    /// are no results.
    pub fn move_next(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.selection = match self.selection {
            Selection::Unselected => Selection::Selected(0),
            Selection::Selected(i) => Selection::Selected((i + 1) % n),
        };
    }

    /// Moves to the previous result, wrapping to the last.
    ///
    /// From `Unselected` the last result becomes selected. No-op when there
    /// are no results.
    pub fn move_previous(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.selection = match self.selection {
            Selection::Unselected => Selection::Selected(n - 1),
            Selection::Selected(i) => Selection::Selected((i + n - 1) % n),
        };
    }

    /// Selects `index` directly. Out-of-range hovers are ignored.
    pub fn hover(&mut self, index: usize, n: usize) {
        if index < n {
            self.selection = Selection::Selected(index);
        }
    }

    /// Clears the selection. Called whenever the result list is recomputed.
    pub fn reset(&mut self) {
        self.selection = Selection::Unselected;
    }

    /// Returns the committed index, if any.
    #[must_use]
    pub const fn commit(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Corrects a selection that no longer fits `n` results.
    ///
    /// Returns `true` if a correction was made.
    pub fn enforce(&mut self, n: usize) -> bool {
        match self.selection {
            Selection::Selected(i) if i >= n => {
                tracing::warn!(index = i, result_count = n, "selection out of range, clearing");
                self.selection = Selection::Unselected;
                true
            }
            _ => false,
        }
    }
}
