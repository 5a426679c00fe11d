//! Shared rendering utilities.
//!
//! Widths are terminal cells from `unicode-width`: CJK and emoji take two
//! cells, combining marks none. Text is always cut on `char` boundaries.

use crate::search::Segment;
use crate::ui::theme::{Color, Theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns the longest prefix of `text` that fits in `width` cells, ending in
/// `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = take_width(text, width - 1);
    out.push('…');
    out
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Longest prefix of `text` that fits in `width` cells, without an ellipsis.
fn take_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Prints highlight segments, clipped to `max_width` cells.
///
/// Matched runs use the theme's match colors. On a selected row the
/// selection colors are restored after each matched run, otherwise the
/// `base_fg` is restored. Returns the number of cells printed.
pub fn render_segments(
    segments: &[Segment],
    theme: &Theme,
    base_fg: Color,
    is_selected: bool,
    max_width: usize,
) -> usize {
    let mut printed = 0;

    for segment in segments {
        let remaining = max_width.saturating_sub(printed);
        if remaining == 0 {
            break;
        }
        let text = take_width(&segment.text, remaining);
        printed += display_width(&text);

        if !segment.matched {
            print!("{text}");
            continue;
        }

        print!("{}", theme.colors.match_highlight_fg.fg());
        print!("{}", theme.colors.match_highlight_bg.bg());
        print!("{text}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", theme.colors.selection_fg.fg());
            print!("{}", theme.colors.selection_bg.bg());
        } else {
            print!("{}", base_fg.fg());
        }
    }

    printed
}
