//! Footer help bar.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered on `row`, padded to the full width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", theme.colors.text_dim.fg());
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
