//! Top-level rendering coordinator.
//!
//! ```text
//! OverlayState → compute_viewmodel → OverlayViewModel → components → ANSI
//! ```
//!
//! The page is always drawn first and the overlay on top of it. Nothing here
//! clears the screen or flushes stdout; the caller owns the terminal.

use crate::app::OverlayState;
use crate::domain::Product;
use crate::ui::components;

/// Renders the page and, when open, the overlay to stdout.
///
/// `page` is the product the navigator last showed, if any.
pub fn render(state: &OverlayState, page: Option<&Product>, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let footer = viewmodel
        .as_ref()
        .map_or_else(|| state.compute_footer(), |vm| vm.footer.clone());

    components::render_page(page, &footer, &state.theme, rows, cols);

    if let Some(vm) = &viewmodel {
        components::render_overlay(vm, &state.theme);
    }
}
