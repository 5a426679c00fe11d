//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Storefront title bar
//! - [`search`]: Query input with pending indicator and close button
//! - [`results`]: Results panel and highlighted result rows
//! - [`empty`]: Empty-state message inside the panel
//! - [`footer`]: Keybinding hints
//! - [`detail`]: Product detail page behind the overlay
//!
//! # Layout Modes
//!
//! - [`render_page`]: header, page body and footer, always drawn
//! - [`render_overlay`]: the open overlay, drawn on top of the page

mod detail;
mod empty;
mod footer;
mod header;
mod results;
mod search;

use crate::domain::Product;
use crate::ui::helpers::position_cursor;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, OverlayViewModel};

use detail::render_product_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use results::{render_panel_frame, render_result_rows};
use search::render_search_bar;

/// Storefront name shown in the page header.
pub const STORE_TITLE: &str = " PawTech Store ";

/// Renders the page under the overlay.
///
/// The body shows the last product navigated to, or a welcome line.
pub fn render_page(page: Option<&Product>, footer: &FooterInfo, theme: &Theme, rows: usize, cols: usize) {
    render_header(1, STORE_TITLE, theme, cols);

    match page {
        Some(product) => render_product_detail(3, product, theme, rows.saturating_sub(1), cols),
        None => {
            position_cursor(3, 5);
            print!("{}", theme.colors.text_dim.fg());
            print!("Smart gear for happy pets. Press / to search the catalog.");
            print!("{}", Theme::reset());
        }
    }

    render_footer(rows, footer, theme, cols);
}

/// Renders the open overlay: frame, input, and results panel if visible.
pub fn render_overlay(vm: &OverlayViewModel, theme: &Theme) {
    let layout = &vm.layout;

    render_frame(layout.backdrop, theme);
    render_search_bar(layout.input, layout.close_button, &vm.search_bar, theme);

    if let Some(panel) = layout.panel {
        render_panel_frame(panel, theme);
        if let Some(empty) = &vm.empty_state {
            render_empty_state(panel, empty, theme);
        } else {
            render_result_rows(&layout.result_rows, &vm.results, theme);
        }
    }
}

/// Draws the rounded overlay frame and clears its interior.
fn render_frame(rect: Rect, theme: &Theme) {
    let inner_width = rect.width.saturating_sub(2);

    print!("{}", theme.colors.border.fg());
    position_cursor(rect.row, rect.col);
    print!("╭{}╮", "─".repeat(inner_width));
    for row in rect.row + 1..rect.bottom().saturating_sub(1) {
        position_cursor(row, rect.col);
        print!("│{}│", " ".repeat(inner_width));
    }
    position_cursor(rect.bottom().saturating_sub(1), rect.col);
    print!("╰{}╯", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
