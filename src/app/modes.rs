//! Input classification and selection state types.
//!
//! These small enums are shared between the event handler, the selection
//! controller and the presentation layer's hit-testing.
//!
//! # Example
//!
//! ```rust
//! use storefront_search::app::modes::{HitRegion, Key, Selection};
//!
//! let key = Key::ArrowDown;
//! assert!(HitRegion::Outside.dismisses());
//! assert_eq!(Selection::Unselected.index(), None);
//! # let _ = key;
//! ```

/// Keys the overlay reacts to.
///
/// Printable characters are not keys here: they reach the overlay as
/// [`Event::QueryChanged`](crate::app::Event::QueryChanged) with the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Any other key; ignored.
    Other,
}

/// Which part of the screen a pointer event landed on.
///
/// Produced by [`OverlayLayout::hit_test`](crate::ui::layout::OverlayLayout::hit_test).
/// Only [`HitRegion::Outside`] counts as an outside interaction; the input,
/// results panel and backdrop all belong to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The close button inside the input box.
    CloseButton,
    /// The query input box.
    Input,
    /// A result row, by index into the current results.
    Result(usize),
    /// The results panel outside any row (borders, empty-state text).
    ResultsPanel,
    /// The frame surrounding input and panel.
    Backdrop,
    /// Anywhere else.
    Outside,
}

impl HitRegion {
    /// Returns `true` if a pointer-down here should dismiss the overlay.
    #[must_use]
    pub const fn dismisses(self) -> bool {
        matches!(self, Self::Outside)
    }
}

/// Selection state over the current result list.
///
/// `Unselected` is the `-1` of index-based presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(index) => Some(index),
        }
    }
}
