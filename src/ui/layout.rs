//! Overlay geometry and pointer hit-testing.
//!
//! The overlay is drawn as a centered frame (the backdrop) holding the query
//! input box and, below it, the results panel. Coordinates are 1-indexed
//! terminal cells, matching [`position_cursor`](crate::ui::helpers::position_cursor).
//!
//! ```text
//!  ╭──────────────────────────────╮   ← backdrop (frame)
//!  │┌────────────────────────────┐│
//!  ││ Search products...     [x] ││   ← input, close button
//!  │└────────────────────────────┘│
//!  │┌────────────────────────────┐│
//!  ││ Smart Feeder Pro   $149.00 ││   ← results panel, 2 lines per row
//!  ││   App-controlled portions  ││
//!  │└────────────────────────────┘│
//!  ╰──────────────────────────────╯
//! ```

use crate::app::modes::HitRegion;

/// First terminal row of the overlay frame. Row 1 is the page header.
const TOP_ROW: usize = 3;
/// Widest the overlay frame is allowed to get.
const MAX_WIDTH: usize = 72;
/// Terminal lines used by one result row.
pub const RESULT_ROW_HEIGHT: usize = 2;
/// Inner lines of a panel that has no result rows.
const EMPTY_PANEL_LINES: usize = 2;
/// Width of the `[x]` close button.
const CLOSE_BUTTON_WIDTH: usize = 3;

/// A rectangle of terminal cells, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.col
            && col < self.col + self.width
            && row >= self.row
            && row < self.row + self.height
    }

    /// Row just below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.row + self.height
    }
}

/// Resolved rectangles of the open overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub backdrop: Rect,
    pub input: Rect,
    pub close_button: Rect,
    pub panel: Option<Rect>,
    /// One rectangle per result, in result order.
    pub result_rows: Vec<Rect>,
}

impl OverlayLayout {
    /// Lays out the overlay for a `rows` x `cols` terminal.
    ///
    /// `panel_rows` is `None` when the results panel is hidden, otherwise the
    /// number of result rows it holds (zero shows the empty-state lines).
    #[must_use]
    pub fn compute(rows: usize, cols: usize, panel_rows: Option<usize>) -> Self {
        let width = cols.saturating_sub(4).clamp(cols.min(20), MAX_WIDTH);
        let left = cols.saturating_sub(width) / 2 + 1;
        let inner_width = width.saturating_sub(2);

        let input = Rect::new(TOP_ROW + 1, left + 1, inner_width, 3);
        let close_button = Rect::new(
            input.row + 1,
            (input.col + input.width).saturating_sub(CLOSE_BUTTON_WIDTH + 2),
            CLOSE_BUTTON_WIDTH,
            1,
        );

        let (panel, result_rows) = panel_rows.map_or((None, Vec::new()), |count| {
            let body = if count == 0 {
                EMPTY_PANEL_LINES
            } else {
                count * RESULT_ROW_HEIGHT
            };
            let panel = Rect::new(input.bottom(), left + 1, inner_width, body + 2);
            let result_rows = (0..count)
                .map(|i| {
                    Rect::new(
                        panel.row + 1 + i * RESULT_ROW_HEIGHT,
                        panel.col + 1,
                        inner_width.saturating_sub(2),
                        RESULT_ROW_HEIGHT,
                    )
                })
                .filter(|rect| rect.row <= rows)
                .collect();
            (Some(panel), result_rows)
        });

        let content_bottom = panel.map_or(input.bottom(), |p| p.bottom());
        let backdrop = Rect::new(TOP_ROW, left, width, content_bottom + 1 - TOP_ROW);

        Self {
            backdrop,
            input,
            close_button,
            panel,
            result_rows,
        }
    }

    /// Classifies a pointer position.
    ///
    /// Nested regions win over the ones containing them, so a click on a
    /// result row reports [`HitRegion::Result`] rather than the panel.
    #[must_use]
    pub fn hit_test(&self, col: usize, row: usize) -> HitRegion {
        if self.close_button.contains(col, row) {
            return HitRegion::CloseButton;
        }
        if self.input.contains(col, row) {
            return HitRegion::Input;
        }
        if let Some(index) = self.result_rows.iter().position(|r| r.contains(col, row)) {
            return HitRegion::Result(index);
        }
        if self.panel.is_some_and(|p| p.contains(col, row)) {
            return HitRegion::ResultsPanel;
        }
        if self.backdrop.contains(col, row) {
            return HitRegion::Backdrop;
        }
        HitRegion::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_only_layout() {
        let layout = OverlayLayout::compute(24, 80, None);
        assert!(layout.panel.is_none());
        assert!(layout.result_rows.is_empty());
        assert_eq!(layout.backdrop.width, MAX_WIDTH);
        assert_eq!(layout.backdrop.bottom(), layout.input.bottom() + 1);
    }

    #[test]
    fn test_hit_test_regions() {
        let layout = OverlayLayout::compute(24, 80, Some(2));
        let input = layout.input;
        let first = layout.result_rows[0];
        let second = layout.result_rows[1];
        let panel = layout.panel.unwrap();
        let close = layout.close_button;

        assert_eq!(layout.hit_test(close.col, close.row), HitRegion::CloseButton);
        assert_eq!(layout.hit_test(input.col + 2, input.row + 1), HitRegion::Input);
        assert_eq!(layout.hit_test(first.col, first.row + 1), HitRegion::Result(0));
        assert_eq!(layout.hit_test(second.col + 5, second.row), HitRegion::Result(1));
        assert_eq!(layout.hit_test(panel.col, panel.row), HitRegion::ResultsPanel);
        assert_eq!(
            layout.hit_test(layout.backdrop.col, layout.backdrop.row),
            HitRegion::Backdrop
        );
        assert_eq!(layout.hit_test(1, 1), HitRegion::Outside);
        assert_eq!(layout.hit_test(40, 23), HitRegion::Outside);
    }

    #[test]
    fn test_empty_panel_has_no_rows() {
        let layout = OverlayLayout::compute(24, 80, Some(0));
        let panel = layout.panel.unwrap();
        assert_eq!(panel.height, EMPTY_PANEL_LINES + 2);
        assert_eq!(layout.hit_test(panel.col + 3, panel.row + 1), HitRegion::ResultsPanel);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let layout = OverlayLayout::compute(24, 16, None);
        assert_eq!(layout.backdrop.col, 1);
        assert_eq!(layout.backdrop.width, 16);
    }

    #[test]
    fn test_rows_below_screen_are_dropped() {
        let layout = OverlayLayout::compute(10, 80, Some(6));
        assert!(layout.result_rows.len() < 6);
        assert!(layout.result_rows.iter().all(|r| r.row <= 10));
    }
}
