//! Query input box.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const PLACEHOLDER: &str = "Search products...";
const PENDING_LABEL: &str = "searching…";
const CLOSE_LABEL: &str = "[x]";

/// Renders the bordered input box into `rect`, with the close button at
/// `close` and a pending indicator to its left while a search is running.
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ feed▏              searching…  [x]   │
/// └──────────────────────────────────────┘
/// ```
pub fn render_search_bar(rect: Rect, close: Rect, search: &SearchBarInfo, theme: &Theme) {
    let inner_width = rect.width.saturating_sub(2);

    position_cursor(rect.row, rect.col);
    print!("{}", theme.colors.search_bar_border.fg());
    print!("┌{}┐", "─".repeat(inner_width));

    position_cursor(rect.row + 1, rect.col);
    print!("│{}", " ".repeat(inner_width));
    print!("│");

    position_cursor(rect.row + 2, rect.col);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let pending_width = if search.is_pending {
        display_width(PENDING_LABEL) + 2
    } else {
        0
    };
    let text_width = close
        .col
        .saturating_sub(rect.col + 2)
        .saturating_sub(pending_width + 1);

    position_cursor(rect.row + 1, rect.col + 2);
    if search.query.is_empty() {
        print!("{}{}", Theme::dim(), theme.colors.text_dim.fg());
        print!("{}", truncate(PLACEHOLDER, text_width));
    } else {
        print!("{}", theme.colors.text_normal.fg());
        print!("{}▏", truncate(&search.query, text_width.saturating_sub(1)));
    }
    print!("{}", Theme::reset());

    if search.is_pending {
        position_cursor(close.row, close.col.saturating_sub(pending_width));
        print!("{}{PENDING_LABEL}{}", theme.colors.pending_fg.fg(), Theme::reset());
    }

    position_cursor(close.row, close.col);
    print!("{}{CLOSE_LABEL}{}", theme.colors.text_dim.fg(), Theme::reset());
}
