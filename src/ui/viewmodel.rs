//! View model types representing the renderable overlay.
//!
//! View models are computed by [`OverlayState::compute_viewmodel`] and consumed
//! by the renderer. They hold display-ready data only: highlight segments are
//! already split, prices already formatted and the screen layout already
//! resolved, so rendering and hit-testing agree on where things are.
//!
//! [`OverlayState::compute_viewmodel`]: crate::app::OverlayState::compute_viewmodel

use crate::domain::ProductId;
use crate::search::Segment;
use crate::ui::layout::OverlayLayout;

/// Complete view model of the open overlay.
#[derive(Debug, Clone)]
pub struct OverlayViewModel {
    /// Input box state.
    pub search_bar: SearchBarInfo,

    /// Result rows in catalog order, at most [`MAX_RESULTS`](crate::search::MAX_RESULTS).
    pub results: Vec<ResultItem>,

    /// Index into `results`, `None` when nothing is selected.
    pub selected_index: Option<usize>,

    /// Whether the results panel is shown at all (query non-empty).
    pub show_results_panel: bool,

    /// Message for a visible panel with no results.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,

    /// Screen rectangles for rendering and pointer hit-testing.
    pub layout: OverlayLayout,
}

/// Display information for a single result row.
#[derive(Debug, Clone)]
pub struct ResultItem {
    pub id: ProductId,

    /// Product name split into matched and unmatched runs.
    pub name: Vec<Segment>,

    /// Short description split into runs; empty when the product has none.
    pub description: Vec<Segment>,

    /// Category label, e.g. "Smart Feeders".
    pub category: String,

    /// Formatted price, e.g. "$149.00".
    pub price: String,

    pub is_selected: bool,
}

/// Search input display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Query exactly as typed.
    pub query: String,

    /// Shows the "searching" indicator.
    pub is_pending: bool,
}

/// Keybinding hints under the overlay.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Message shown in place of results.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
