//! Action execution and timer delivery.
//!
//! [`OverlayRuntime`] is the host side of the event/action loop. It feeds
//! events to [`handle_event`], executes the returned actions in order, and
//! turns expired timers back into [`Event::TimerFired`]. The clock and the
//! navigator are type parameters so tests can drive everything with a
//! [`ManualClock`](crate::timer::ManualClock) and a recording navigator.

use super::handler::{handle_event, Event};
use super::{Action, OverlayState};
use crate::domain::error::Result;
use crate::domain::ProductId;
use crate::timer::{Clock, TimerQueue};
use std::time::Duration;

/// Receives commit requests from the overlay.
///
/// Navigation is fire-and-forget: the overlay has already closed by the time
/// the host acts on it.
pub trait Navigator {
    fn navigate_to_product(&mut self, id: &ProductId);
}

/// Drives an [`OverlayState`] against a clock and a navigator.
#[derive(Debug)]
pub struct OverlayRuntime<C: Clock, N: Navigator> {
    state: OverlayState,
    clock: C,
    navigator: N,
    timers: TimerQueue,
    focus_requested: bool,
}

impl<C: Clock, N: Navigator> OverlayRuntime<C, N> {
    pub fn new(state: OverlayState, clock: C, navigator: N) -> Self {
        Self {
            state,
            clock,
            navigator,
            timers: TimerQueue::new(),
            focus_requested: false,
        }
    }

    pub const fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Mutable access for host-side changes such as
    /// [`OverlayState::replace_catalog`].
    pub fn state_mut(&mut self) -> &mut OverlayState {
        &mut self.state
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Number of timers still scheduled.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Handles one event and executes its actions.
    ///
    /// Returns whether the screen needs a re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(should_render)
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(?action, "executing action");
        match action {
            Action::FocusInput => self.focus_requested = true,
            Action::NavigateToProduct { id } => self.navigator.navigate_to_product(&id),
            Action::ScheduleTimer { id, delay } => {
                self.timers.schedule(id, self.clock.now() + delay);
            }
            Action::CancelTimer { id } => {
                self.timers.cancel(id);
            }
        }
    }

    /// Delivers every timer that has expired by now, one event at a time.
    ///
    /// Returns whether any delivery requested a re-render.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn poll_timers(&mut self) -> Result<bool> {
        let mut should_render = false;
        for id in self.timers.expire(self.clock.now()) {
            should_render |= self.dispatch(&Event::TimerFired(id))?;
        }
        Ok(should_render)
    }

    /// Time left until the next timer expires, if any is scheduled.
    pub fn next_timer_in(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    /// Returns and clears a pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}
