//! Terminal rendering layer.
//!
//! ```text
//! OverlayState → compute_viewmodel → OverlayViewModel → render → ANSI output
//!                                         ↘ layout.hit_test (pointer input)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready overlay state
//! - [`layout`]: Screen rectangles and pointer hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Cursor positioning, truncation, segment printing
//! - [`theme`]: Color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{OverlayLayout, Rect};
pub use renderer::render;
pub use theme::{Color, Theme};
pub use viewmodel::{EmptyState, FooterInfo, OverlayViewModel, ResultItem, SearchBarInfo};
