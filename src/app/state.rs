//! Overlay state and view model computation.
//!
//! [`OverlayState`] is the single source of truth for the overlay: closed, or
//! open with exactly one [`SearchSession`]. The catalog, theme and timer id
//! allocator outlive sessions; everything query-related lives in the session
//! and disappears with it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_search::app::OverlayState;
//! use storefront_search::catalog::JsonCatalog;
//! use storefront_search::ui::Theme;
//!
//! let catalog = Arc::new(JsonCatalog::builtin()?);
//! let mut state = OverlayState::new(catalog, Theme::default());
//! assert!(state.compute_viewmodel(24, 80).is_none());
//!
//! state.open();
//! state.set_query("feeder");
//! let vm = state.compute_viewmodel(24, 80).unwrap();
//! assert!(!vm.results.is_empty());
//! # Ok::<(), storefront_search::domain::SearchError>(())
//! ```

use super::latency::DEFAULT_LATENCY;
use super::session::SearchSession;
use super::Action;
use crate::catalog::Catalog;
use crate::domain::Product;
use crate::search::highlight;
use crate::timer::TimerIds;
use crate::ui::layout::OverlayLayout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, OverlayViewModel, ResultItem, SearchBarInfo,
};
use std::sync::Arc;
use std::time::Duration;

/// Central overlay state container.
#[derive(Debug, Clone)]
pub struct OverlayState {
    catalog: Arc<dyn Catalog>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// `Some` exactly while the overlay is open.
    session: Option<SearchSession>,

    /// Shared across sessions so timer ids never repeat.
    timer_ids: TimerIds,

    latency: Duration,
}

impl OverlayState {
    /// Creates a closed overlay over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>, theme: Theme) -> Self {
        Self {
            catalog,
            theme,
            session: None,
            timer_ids: TimerIds::new(),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Sets the simulated search latency used by sessions opened afterwards.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut SearchSession> {
        self.session.as_mut()
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    /// Opens the overlay with a fresh session.
    ///
    /// Returns `false` without touching the existing session when already
    /// open.
    pub fn open(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(SearchSession::new(self.latency));
        tracing::debug!("overlay opened");
        true
    }

    /// Closes the overlay and drops the session.
    ///
    /// Returns the actions that cancel the session's outstanding timer.
    pub fn close(&mut self) -> Vec<Action> {
        let Some(mut session) = self.session.take() else {
            return Vec::new();
        };
        tracing::debug!(query = %session.normalized_query(), "overlay closed");
        session.shutdown()
    }

    /// Updates the query of the open session. No-op while closed.
    pub fn set_query(&mut self, raw: &str) -> Vec<Action> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let ids = &mut self.timer_ids;
        session.set_query(raw, self.catalog.products(), || ids.allocate())
    }

    /// Swaps the catalog and re-derives results for the current query.
    ///
    /// The selection is reset; the pending flag is left alone.
    pub fn replace_catalog(&mut self, catalog: Arc<dyn Catalog>) {
        self.catalog = catalog;
        tracing::debug!(product_count = self.catalog.products().len(), "catalog replaced");

        if let Some(session) = self.session.as_mut() {
            session.refresh_results(self.catalog.products());
            session.enforce_invariants();
        }
    }

    /// Computes the view model of the open overlay, or `None` while closed.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> Option<OverlayViewModel> {
        let session = self.session.as_ref()?;

        let show_results_panel = !session.normalized_query().is_empty();
        let selected_index = session.selected_index();
        let highlight_query = session.raw_query().trim();

        let results: Vec<ResultItem> = session
            .results()
            .iter()
            .enumerate()
            .map(|(idx, product)| {
                Self::compute_result_item(product, highlight_query, selected_index == Some(idx))
            })
            .collect();

        let empty_state = (show_results_panel && results.is_empty()).then(|| EmptyState {
            message: format!("No products found for \"{highlight_query}\""),
            subtitle: "Try a product name, a feature, or a category like feeders".to_string(),
        });

        let layout =
            OverlayLayout::compute(rows, cols, show_results_panel.then_some(results.len()));

        Some(OverlayViewModel {
            search_bar: SearchBarInfo {
                query: session.raw_query().to_string(),
                is_pending: session.is_pending(),
            },
            results,
            selected_index,
            show_results_panel,
            empty_state,
            footer: self.compute_footer(),
            layout,
        })
    }

    fn compute_result_item(product: &Product, query: &str, is_selected: bool) -> ResultItem {
        ResultItem {
            id: product.id.clone(),
            name: highlight(&product.name, query),
            description: product
                .short_description
                .as_deref()
                .map(|text| highlight(text, query))
                .unwrap_or_default(),
            category: product.category.label().to_string(),
            price: product.price_label(),
            is_selected,
        }
    }

    /// Keybinding hints for the current phase.
    #[must_use]
    pub fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.session {
            None => "/: search  q: quit",
            Some(session) if session.results().is_empty() => {
                "Type to search  Esc: close  Tab: leave input"
            }
            Some(_) => "↑/↓ or Ctrl+n/p: navigate  Enter: open  Esc: close  Type to filter",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
