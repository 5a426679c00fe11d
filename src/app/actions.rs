//! Actions representing side effects requested by the overlay.
//!
//! The event handler never touches timers, the navigator or the terminal
//! directly. It returns a `Vec<Action>` and the
//! [`OverlayRuntime`](crate::app::OverlayRuntime) (or any other host) executes
//! them in order. Order matters: a `CancelTimer` for the previous latency
//! timer always precedes the `ScheduleTimer` for the next one.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_search::app::Action;
//! use storefront_search::timer::TimerIds;
//!
//! let mut ids = TimerIds::new();
//! let actions = vec![
//!     Action::FocusInput,
//!     Action::ScheduleTimer { id: ids.allocate(), delay: Duration::from_millis(150) },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::ProductId;
use crate::timer::TimerId;
use std::time::Duration;

/// Commands representing side effects to be executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Moves keyboard focus into the query input.
    ///
    /// Emitted once when the overlay opens.
    FocusInput,

    /// Asks the navigator to show a product's detail view.
    ///
    /// Emitted on commit, before the session is discarded.
    NavigateToProduct {
        /// Identifier of the chosen product.
        id: ProductId,
    },

    /// Starts a one-shot timer that will be delivered back as
    /// [`Event::TimerFired`](crate::app::Event::TimerFired).
    ScheduleTimer {
        id: TimerId,
        /// Delay from the moment the action is executed.
        delay: Duration,
    },

    /// Drops a timer that has not fired yet. Unknown ids are ignored.
    CancelTimer { id: TimerId },
}
