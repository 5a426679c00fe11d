//! Simulated search latency.
//!
//! Each query edit, other than clearing the input, marks the session as
//! pending and restarts a single one-shot timer. Only the firing of the most
//! recently scheduled timer clears the flag; earlier timers are cancelled when
//! they are replaced, and if one fires anyway (already queued by the host) its
//! id no longer matches and it is ignored.

use super::Action;
use crate::timer::TimerId;
use std::time::Duration;

/// Default delay between the last keystroke and the end of "searching".
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Pending flag plus the id of the one outstanding timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencySimulator {
    delay: Duration,
    outstanding: Option<TimerId>,
}

impl LatencySimulator {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            outstanding: None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.outstanding.is_some()
    }

    #[must_use]
    pub const fn outstanding(&self) -> Option<TimerId> {
        self.outstanding
    }

    /// Marks the search as pending under a freshly allocated `id`.
    ///
    /// The previous timer, if any, is cancelled before the new one is
    /// scheduled.
    pub fn restart(&mut self, id: TimerId) -> Vec<Action> {
        let mut actions = self.settle();
        self.outstanding = Some(id);
        actions.push(Action::ScheduleTimer {
            id,
            delay: self.delay,
        });
        tracing::trace!(timer = %id, delay_ms = self.delay.as_millis(), "search pending");
        actions
    }

    /// Clears the pending flag immediately, cancelling the outstanding timer.
    pub fn settle(&mut self) -> Vec<Action> {
        self.outstanding
            .take()
            .map(|id| vec![Action::CancelTimer { id }])
            .unwrap_or_default()
    }

    /// Handles a timer firing. Returns `true` if `id` was the outstanding
    /// timer and the pending flag was cleared.
    pub fn on_timer_fired(&mut self, id: TimerId) -> bool {
        if self.outstanding == Some(id) {
            self.outstanding = None;
            tracing::trace!(timer = %id, "search settled");
            true
        } else {
            tracing::trace!(timer = %id, "stale timer ignored");
            false
        }
    }
}

impl Default for LatencySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}
