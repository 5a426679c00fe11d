//! Per-open search session.
//!
//! A [`SearchSession`] exists only while the overlay is open. It is created
//! fresh on open and dropped on close, so nothing typed in one session can
//! leak into the next.

use super::latency::LatencySimulator;
use super::selection::SelectionController;
use super::Action;
use crate::domain::Product;
use crate::search::{normalize_query, search_products};
use crate::timer::TimerId;
use std::time::Duration;

/// Query, derived results, selection and pending state of one open overlay.
#[derive(Debug, Clone)]
pub struct SearchSession {
    raw_query: String,
    normalized_query: String,
    results: Vec<Product>,
    selection: SelectionController,
    latency: LatencySimulator,
}

impl SearchSession {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            raw_query: String::new(),
            normalized_query: String::new(),
            results: Vec::new(),
            selection: SelectionController::new(),
            latency: LatencySimulator::new(latency),
        }
    }

    #[must_use]
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    #[must_use]
    pub fn normalized_query(&self) -> &str {
        &self.normalized_query
    }

    #[must_use]
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.latency.is_pending()
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    /// Selected index with `-1` for "no selection".
    #[must_use]
    pub fn selected_index_signed(&self) -> isize {
        self.selected_index()
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// The product an Enter press would commit, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selection.commit().and_then(|i| self.results.get(i))
    }

    /// Replaces the query text and re-derives everything that depends on it.
    ///
    /// Any change marks the session pending and restarts the latency timer,
    /// except clearing the input to `""`, which settles immediately.
    /// `next_timer` is only invoked when a timer gets scheduled.
    pub fn set_query(
        &mut self,
        raw: &str,
        products: &[Product],
        next_timer: impl FnOnce() -> TimerId,
    ) -> Vec<Action> {
        self.raw_query = raw.to_string();
        self.refresh_results(products);

        if self.raw_query.is_empty() {
            self.latency.settle()
        } else {
            self.latency.restart(next_timer())
        }
    }

    /// Recomputes normalized query and results from the current raw query.
    ///
    /// The selection is always reset; the pending flag is untouched.
    pub fn refresh_results(&mut self, products: &[Product]) {
        self.normalized_query = normalize_query(&self.raw_query);
        self.results = search_products(products, &self.normalized_query);
        self.selection.reset();
        tracing::trace!(
            query = %self.normalized_query,
            result_count = self.results.len(),
            "results updated"
        );
    }

    pub fn move_next(&mut self) {
        self.selection.move_next(self.results.len());
    }

    pub fn move_previous(&mut self) {
        self.selection.move_previous(self.results.len());
    }

    pub fn hover(&mut self, index: usize) {
        self.selection.hover(index, self.results.len());
    }

    /// Forwards a timer firing to the latency simulator.
    pub fn on_timer_fired(&mut self, id: TimerId) -> bool {
        self.latency.on_timer_fired(id)
    }

    /// Cancels any outstanding timer. Used when the session is torn down.
    pub fn shutdown(&mut self) -> Vec<Action> {
        self.latency.settle()
    }

    /// Re-checks the selection against the current results.
    pub fn enforce_invariants(&mut self) {
        self.selection.enforce(self.results.len());
    }
}
