#![forbid(unsafe_code)]

//! Initial ratio derivation.
//!
//! A split starts unseeded. The first valid container measurement turns the
//! optional defaults into a ratio exactly once:
//!
//! | Priority | Field | Ratio |
//! |----------|-------|-------|
//! | 1 | `default_right_width` | `100 - w / usable * 100` |
//! | 2 | `default_left_width` | `w / usable * 100` |
//! | 3 | `default_ratio` | as given, `50` when absent |

use divider_core::geometry::{RATIO_SCALE, ratio_for_pixel_width};
use serde::{Deserialize, Serialize};

/// Ratio used when no default of any kind is configured.
pub const DEFAULT_RATIO: f64 = 50.0;

/// Optional starting point for a split.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSpec {
    /// Starting ratio in percent.
    pub default_ratio: Option<f64>,
    /// Starting left pane width in pixels.
    pub default_left_width: Option<f64>,
    /// Starting right pane width in pixels.
    pub default_right_width: Option<f64>,
}

/// Which rule produced the seeded ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultSource {
    RightWidth,
    LeftWidth,
    Ratio,
}

impl DefaultSpec {
    #[must_use]
    pub const fn ratio(ratio: f64) -> Self {
        Self {
            default_ratio: Some(ratio),
            default_left_width: None,
            default_right_width: None,
        }
    }

    #[must_use]
    pub const fn left_width(width: f64) -> Self {
        Self {
            default_ratio: None,
            default_left_width: Some(width),
            default_right_width: None,
        }
    }

    #[must_use]
    pub const fn right_width(width: f64) -> Self {
        Self {
            default_ratio: None,
            default_left_width: None,
            default_right_width: Some(width),
        }
    }

    /// Derive the seed ratio for `usable_width`.
    ///
    /// `usable_width` must be positive; the state machine never seeds from a
    /// degenerate container.
    #[must_use]
    pub fn initial_ratio(&self, usable_width: f64) -> (f64, DefaultSource) {
        if let Some(width) = self.default_right_width {
            return (
                RATIO_SCALE - ratio_for_pixel_width(width, usable_width),
                DefaultSource::RightWidth,
            );
        }
        if let Some(width) = self.default_left_width {
            return (
                ratio_for_pixel_width(width, usable_width),
                DefaultSource::LeftWidth,
            );
        }
        (
            self.default_ratio.unwrap_or(DEFAULT_RATIO),
            DefaultSource::Ratio,
        )
    }
}
