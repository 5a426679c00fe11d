//! Empty-state message inside the results panel.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line centered message inside `panel`.
pub fn render_empty_state(panel: Rect, empty: &EmptyState, theme: &Theme) {
    let inner_width = panel.width.saturating_sub(2);

    let message = truncate(&empty.message, inner_width);
    let padding = inner_width.saturating_sub(display_width(&message)) / 2;
    position_cursor(panel.row + 1, panel.col + 1 + padding);
    print!("{}", theme.colors.empty_state_fg.fg());
    print!("{message}");
    print!("{}", Theme::reset());

    let subtitle = truncate(&empty.subtitle, inner_width);
    let padding = inner_width.saturating_sub(display_width(&subtitle)) / 2;
    position_cursor(panel.row + 2, panel.col + 1 + padding);
    print!("{}", Theme::dim());
    print!("{}", theme.colors.text_dim.fg());
    print!("{subtitle}");
    print!("{}", Theme::reset());
}
