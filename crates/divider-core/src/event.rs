#![forbid(unsafe_code)]

//! Canonical input events for the split state machine.
//!
//! Adapters translate host-toolkit pointer and resize notifications into
//! these values. Coordinates are absolute screen pixels; the core assumes
//! they are finite.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::ContainerBounds;

/// One input delivered to a split.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum SplitInputEvent {
    /// Primary button pressed on the divider handle.
    PointerDown,

    /// Pointer moved anywhere in the window.
    PointerMove {
        /// Absolute horizontal pointer position.
        x: f64,
    },

    /// Primary button released anywhere in the window.
    PointerUp,

    /// The container was laid out or resized.
    ContainerResize {
        /// Absolute left edge of the container.
        x: f64,
        /// Outer container width, divider included.
        width: f64,
    },
}

impl SplitInputEvent {
    /// Build a resize event from container bounds.
    #[must_use]
    pub const fn resize(bounds: ContainerBounds) -> Self {
        Self::ContainerResize {
            x: bounds.x,
            width: bounds.width,
        }
    }

    /// Whether this is a pointer move (the only high-frequency event).
    #[must_use]
    pub const fn is_pointer_move(&self) -> bool {
        matches!(self, Self::PointerMove { .. })
    }
}
