//! Cancellable timers driven by an injectable clock.
//!
//! The overlay never sleeps or spawns anything. It asks for timers through
//! [`Action::ScheduleTimer`](crate::app::Action::ScheduleTimer) and the runtime
//! keeps them in a [`TimerQueue`]. Whoever owns the event loop decides what
//! "now" means through a [`Clock`]: [`SystemClock`] in the terminal front end,
//! [`ManualClock`] in tests so that latency scenarios run without wall-clock
//! waits.
//!
//! # Modules
//!
//! - `clock`: The [`Clock`] trait with system and manual implementations
//! - `queue`: Deadline-ordered timer storage with cancellation

mod clock;
mod queue;

pub use clock::{Clock, ManualClock, SystemClock};
pub use queue::{TimerId, TimerIds, TimerQueue};
