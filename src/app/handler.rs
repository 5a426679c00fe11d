//! Event handling and overlay state transitions.
//!
//! [`handle_event`] is the only place overlay state changes in response to
//! input. It returns whether a re-render is needed plus the side effects to
//! run, and never performs those effects itself.
//!
//! # Event Types
//!
//! - **Lifecycle**: `OpenRequested`, `CloseRequested`, `OutsideInteraction`,
//!   `InputBlurred`
//! - **Input**: `QueryChanged`, `KeyPressed`
//! - **Pointer**: `PointerEnteredResult`, `ResultActivated`, `PointerDown`
//! - **Timers**: `TimerFired`
//!
//! While the overlay is closed every event except `OpenRequested` is ignored.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_search::app::{handle_event, Action, Event, OverlayState};
//! use storefront_search::catalog::JsonCatalog;
//! use storefront_search::ui::Theme;
//!
//! let mut state = OverlayState::new(Arc::new(JsonCatalog::builtin()?), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenRequested)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::FocusInput]);
//! # Ok::<(), storefront_search::domain::SearchError>(())
//! ```

use super::modes::{HitRegion, Key};
use super::{Action, OverlayState};
use crate::domain::error::Result;
use crate::timer::TimerId;

/// Input and timer events delivered to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the overlay with an empty session and focuses the input.
    OpenRequested,
    /// The close button was activated.
    CloseRequested,
    /// The input text changed; carries the full new text.
    QueryChanged(String),
    /// A navigation key while the input is focused.
    KeyPressed(Key),
    /// The pointer moved onto result `i`.
    PointerEnteredResult(usize),
    /// Result `i` was clicked or tapped.
    ResultActivated(usize),
    /// A pointer-down already known to be outside the overlay.
    OutsideInteraction,
    /// A pointer-down, classified by hit-testing.
    PointerDown(HitRegion),
    /// The input lost focus.
    InputBlurred,
    /// A timer scheduled through [`Action::ScheduleTimer`] expired.
    TimerFired(TimerId),
}

/// Processes an event, mutates overlay state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// None of the current transitions fail; the `Result` keeps the signature
/// stable for hosts that propagate errors from event handling.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut OverlayState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if !state.is_open() {
        return match event {
            Event::OpenRequested => {
                state.open();
                Ok((true, vec![Action::FocusInput]))
            }
            _ => {
                tracing::trace!("overlay closed, event ignored");
                Ok((false, vec![]))
            }
        };
    }

    match event {
        Event::OpenRequested => Ok((false, vec![])),
        Event::CloseRequested | Event::OutsideInteraction => Ok((true, state.close())),
        Event::QueryChanged(text) => {
            let actions = state.set_query(text);
            Ok((true, actions))
        }
        Event::KeyPressed(key) => Ok(handle_key(state, *key)),
        Event::PointerEnteredResult(index) => {
            let Some(session) = state.session_mut() else {
                return Ok((false, vec![]));
            };
            let before = session.selected_index();
            session.hover(*index);
            Ok((session.selected_index() != before, vec![]))
        }
        Event::ResultActivated(index) => Ok(commit(state, Some(*index))),
        Event::PointerDown(region) => Ok(handle_pointer_down(state, *region)),
        Event::InputBlurred => {
            let query_empty = state
                .session()
                .is_some_and(|session| session.normalized_query().is_empty());
            if query_empty {
                tracing::debug!("input blurred with empty query");
                Ok((true, state.close()))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::TimerFired(id) => {
            let settled = state
                .session_mut()
                .is_some_and(|session| session.on_timer_fired(*id));
            Ok((settled, vec![]))
        }
    }
}

fn handle_key(state: &mut OverlayState, key: Key) -> (bool, Vec<Action>) {
    match key {
        Key::ArrowDown | Key::ArrowUp => {
            let Some(session) = state.session_mut() else {
                return (false, vec![]);
            };
            if key == Key::ArrowDown {
                session.move_next();
            } else {
                session.move_previous();
            }
            (true, vec![])
        }
        Key::Enter => commit(state, None),
        Key::Escape => (true, state.close()),
        Key::Other => (false, vec![]),
    }
}

fn handle_pointer_down(state: &mut OverlayState, region: HitRegion) -> (bool, Vec<Action>) {
    match region {
        HitRegion::CloseButton => (true, state.close()),
        HitRegion::Result(index) => commit(state, Some(index)),
        HitRegion::Input | HitRegion::ResultsPanel | HitRegion::Backdrop => (false, vec![]),
        HitRegion::Outside => (true, state.close()),
    }
}

/// Commits a result and closes the overlay.
///
/// With `index == None` the current selection is committed. Nothing happens
/// if there is no selection or the index is out of range.
fn commit(state: &mut OverlayState, index: Option<usize>) -> (bool, Vec<Action>) {
    let Some(session) = state.session() else {
        return (false, vec![]);
    };
    let product = match index {
        Some(i) => session.results().get(i),
        None => session.selected_product(),
    };
    let Some(id) = product.map(|product| product.id.clone()) else {
        tracing::debug!(?index, "nothing to commit");
        return (false, vec![]);
    };

    tracing::debug!(product_id = %id, "result committed");
    let mut actions = vec![Action::NavigateToProduct { id }];
    actions.extend(state.close());
    (true, actions)
}
