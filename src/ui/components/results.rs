//! Results panel.
//!
//! Each result takes two lines: the highlighted name with category and price
//! on the right, then the highlighted short description.

use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultItem;

/// Draws the panel border around `panel`.
pub fn render_panel_frame(panel: Rect, theme: &Theme) {
    let inner_width = panel.width.saturating_sub(2);

    print!("{}", theme.colors.border.fg());
    position_cursor(panel.row, panel.col);
    print!("┌{}┐", "─".repeat(inner_width));
    for row in panel.row + 1..panel.bottom().saturating_sub(1) {
        position_cursor(row, panel.col);
        print!("│{}│", " ".repeat(inner_width));
    }
    position_cursor(panel.bottom().saturating_sub(1), panel.col);
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders every result into its row rectangle.
pub fn render_result_rows(rows: &[Rect], items: &[ResultItem], theme: &Theme) {
    for (rect, item) in rows.iter().zip(items) {
        render_result_row(*rect, item, theme);
    }
}

fn render_result_row(rect: Rect, item: &ResultItem, theme: &Theme) {
    let (text_color, fill) = if item.is_selected {
        (theme.colors.selection_fg, Some(theme.colors.selection_bg))
    } else {
        (theme.colors.text_normal, None)
    };
    let start_line = |row: usize| {
        position_cursor(row, rect.col);
        print!("{}", text_color.fg());
        if let Some(fill) = fill {
            print!("{}", fill.bg());
        }
    };

    let meta = format!("{}  {}", item.category, item.price);
    let meta_width = display_width(&meta);
    let name_width = rect.width.saturating_sub(meta_width + 3);

    start_line(rect.row);
    print!(" ");
    if item.is_selected {
        print!("{}", Theme::bold());
    }
    let printed = helpers::render_segments(&item.name, theme, text_color, item.is_selected, name_width);
    print!("{}", " ".repeat(rect.width.saturating_sub(printed + meta_width + 2)));
    if !item.is_selected {
        print!("{}", theme.colors.text_dim.fg());
    }
    print!("{}", item.category);
    if !item.is_selected {
        print!("{}", theme.colors.price_fg.fg());
    }
    print!("  {} ", item.price);
    print!("{}", Theme::reset());

    start_line(rect.row + 1);
    let desc_color = if item.is_selected {
        text_color
    } else {
        theme.colors.text_dim
    };
    print!("{}   ", desc_color.fg());
    let printed = helpers::render_segments(
        &item.description,
        theme,
        desc_color,
        item.is_selected,
        rect.width.saturating_sub(4),
    );
    print!("{}", " ".repeat(rect.width.saturating_sub(printed + 3)));
    print!("{}", Theme::reset());
}
