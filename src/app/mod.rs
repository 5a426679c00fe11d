//! Application layer: overlay state, events and actions.
//!
//! ```text
//! Input → Event → handle_event → OverlayState mutation → Actions
//!                      ↑                                    ↓
//!                      └──── TimerFired ← OverlayRuntime ←──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and lifecycle transitions
//! - [`modes`]: Keys, hit regions and selection state
//! - [`selection`]: Circular selection over the result list
//! - [`latency`]: Simulated "searching" indicator
//! - [`session`]: Per-open query, results and selection
//! - [`state`]: Overlay state container and view model computation
//! - [`runtime`]: Action execution, timers and navigation

pub mod actions;
pub mod handler;
pub mod latency;
pub mod modes;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use latency::{LatencySimulator, DEFAULT_LATENCY};
pub use modes::{HitRegion, Key, Selection};
pub use runtime::{Navigator, OverlayRuntime};
pub use selection::SelectionController;
pub use session::SearchSession;
pub use state::OverlayState;
