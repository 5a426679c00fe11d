//! Storefront title bar.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;

/// Renders `title` centered on `row` with the header colors.
pub fn render_header(row: usize, title: &str, theme: &Theme, cols: usize) {
    let title_len = display_width(title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", theme.colors.header_fg.fg());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", bg.bg());
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
}
