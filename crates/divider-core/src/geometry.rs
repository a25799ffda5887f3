#![forbid(unsafe_code)]

//! Geometric primitives for a horizontal two-pane split.
//!
//! All values are CSS-style pixels in `f64`. A ratio is a percentage in
//! `[0, 100]` of the *usable* width (container width minus divider width)
//! allocated to the left pane.
//!
//! ```
//! use divider_core::geometry::{pixel_width_for_ratio, ratio_for_pixel_width};
//!
//! assert_eq!(pixel_width_for_ratio(25.0, 400.0), 100.0);
//! assert_eq!(ratio_for_pixel_width(100.0, 400.0), 25.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full-scale ratio value (the whole usable width).
pub const RATIO_SCALE: f64 = 100.0;

/// Horizontal extent of the split container in screen coordinates.
///
/// Supplied by the adapter on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerBounds {
    /// Left edge in absolute screen coordinates.
    pub x: f64,
    /// Outer width, divider included.
    pub width: f64,
}

impl ContainerBounds {
    /// Create new container bounds.
    #[inline]
    pub const fn new(x: f64, width: f64) -> Self {
        Self { x, width }
    }

    /// Right edge (inclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Whether an absolute pointer coordinate lies inside the container.
    #[inline]
    pub fn contains(&self, pointer_x: f64) -> bool {
        within_container_bounds(self.x, self.width, pointer_x)
    }

    /// Convert an absolute pointer coordinate into a container-local offset.
    #[inline]
    pub fn local(&self, pointer_x: f64) -> f64 {
        to_local_position(self.x, pointer_x)
    }

    /// Width left for the two panes once the divider is taken out.
    #[inline]
    pub fn usable_width(&self, divider_width: f64) -> f64 {
        usable_width(self.width, divider_width)
    }
}

/// Which side of a limit a pane width must stay on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LimitKind {
    /// Width must be `<=` the limit.
    Max,
    /// Width must be `>=` the limit.
    Min,
}

/// Offset of `pointer_x` from the container's left edge. No clamping.
#[inline]
pub fn to_local_position(container_x: f64, pointer_x: f64) -> f64 {
    pointer_x - container_x
}

/// Pixel width of a pane holding `ratio` percent of `usable_width`.
#[inline]
pub fn pixel_width_for_ratio(ratio: f64, usable_width: f64) -> f64 {
    usable_width * ratio / RATIO_SCALE
}

/// Ratio that gives a pane `width` pixels out of `usable_width`.
///
/// The caller must ensure `usable_width` is positive.
#[inline]
pub fn ratio_for_pixel_width(width: f64, usable_width: f64) -> f64 {
    width / usable_width * RATIO_SCALE
}

/// Container width minus divider width.
#[inline]
pub fn usable_width(container_width: f64, divider_width: f64) -> f64 {
    container_width - divider_width
}

/// Inclusive containment test against `[container_x, container_x + container_width]`.
///
/// This bound is never relaxed by movement direction.
#[inline]
pub fn within_container_bounds(container_x: f64, container_width: f64, pointer_x: f64) -> bool {
    pointer_x >= container_x && pointer_x <= container_x + container_width
}

/// Check a pane's pixel width against an optional limit.
///
/// `ratio` is the pane's own share: pass `ratio` for the left pane and
/// `100 - ratio` for the right pane. An absent limit is always satisfied.
#[inline]
pub fn check_pixel_limit(
    ratio: f64,
    limit: Option<f64>,
    usable_width: f64,
    kind: LimitKind,
) -> bool {
    let Some(limit) = limit else {
        return true;
    };
    let width = pixel_width_for_ratio(ratio, usable_width);
    match kind {
        LimitKind::Max => width <= limit,
        LimitKind::Min => width >= limit,
    }
}
