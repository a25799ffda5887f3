#![forbid(unsafe_code)]

//! Directional boundary policy for divider moves.
//!
//! The policy decides whether a candidate pointer position may move the
//! divider. It looks at the *current* ratio, not the candidate one:
//!
//! - A constraint the current layout already satisfies never blocks a move.
//! - A constraint the current layout violates (the container shrank, or the
//!   constraints changed underneath the user) only admits moves in the one
//!   direction that reduces the violation.
//! - The pointer must always lie inside the container, whatever the direction.
//!
//! Nothing is clamped. An admitted move lands exactly where the pointer is,
//! which may overshoot a bound by up to one move.
//!
//! ```
//! use divider_core::ContainerBounds;
//! use divider_layout::constraint::{ConstraintSet, MoveProposal, admits_move};
//!
//! let constraints = ConstraintSet::default().with_left_min_width(50.0);
//! let bounds = ContainerBounds::new(0.0, 502.0);
//!
//! // Left pane is 40px (ratio 8% of 500): leftMin is already violated.
//! let grow = MoveProposal::new(8.0, 500.0, bounds, 60.0);
//! let shrink = MoveProposal::new(8.0, 500.0, bounds, 30.0);
//! assert!(admits_move(&constraints, &grow));
//! assert!(!admits_move(&constraints, &shrink));
//! ```

use std::fmt;

use divider_core::geometry::{
    ContainerBounds, LimitKind, RATIO_SCALE, check_pixel_limit, pixel_width_for_ratio,
};
use serde::{Deserialize, Serialize};

/// Optional pixel and percentage bounds on the two panes.
///
/// Bounds are not cross-validated: `left_min_width > left_max_width` simply
/// makes part of the range unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSet {
    /// Smallest left pane width in pixels.
    pub left_min_width: Option<f64>,
    /// Largest left pane width in pixels.
    pub left_max_width: Option<f64>,
    /// Smallest right pane width in pixels.
    pub right_min_width: Option<f64>,
    /// Largest right pane width in pixels.
    pub right_max_width: Option<f64>,
    /// Lower ratio bound, exclusive.
    pub min_ratio: Option<f64>,
    /// Upper ratio bound, exclusive.
    pub max_ratio: Option<f64>,
}

impl ConstraintSet {
    /// A set with no bounds at all.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            left_min_width: None,
            left_max_width: None,
            right_min_width: None,
            right_max_width: None,
            min_ratio: None,
            max_ratio: None,
        }
    }

    #[must_use]
    pub const fn with_left_min_width(mut self, width: f64) -> Self {
        self.left_min_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_left_max_width(mut self, width: f64) -> Self {
        self.left_max_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_right_min_width(mut self, width: f64) -> Self {
        self.right_min_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_right_max_width(mut self, width: f64) -> Self {
        self.right_max_width = Some(width);
        self
    }

    #[must_use]
    pub const fn with_min_ratio(mut self, ratio: f64) -> Self {
        self.min_ratio = Some(ratio);
        self
    }

    #[must_use]
    pub const fn with_max_ratio(mut self, ratio: f64) -> Self {
        self.max_ratio = Some(ratio);
        self
    }

    /// Whether no bound is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::unconstrained()
    }

    /// Whether `ratio` satisfies one constraint at the given usable width.
    ///
    /// Pixel bounds are inclusive. Ratio bounds are exclusive: a ratio equal
    /// to `max_ratio` counts as a violation.
    #[must_use]
    pub fn is_satisfied(&self, constraint: BoundaryConstraint, ratio: f64, usable_width: f64) -> bool {
        let right_share = RATIO_SCALE - ratio;
        match constraint {
            BoundaryConstraint::LeftMax => {
                check_pixel_limit(ratio, self.left_max_width, usable_width, LimitKind::Max)
            }
            BoundaryConstraint::LeftMin => {
                check_pixel_limit(ratio, self.left_min_width, usable_width, LimitKind::Min)
            }
            BoundaryConstraint::RightMax => {
                check_pixel_limit(right_share, self.right_max_width, usable_width, LimitKind::Max)
            }
            BoundaryConstraint::RightMin => {
                check_pixel_limit(right_share, self.right_min_width, usable_width, LimitKind::Min)
            }
            BoundaryConstraint::RatioMax => self.max_ratio.is_none_or(|max| ratio < max),
            BoundaryConstraint::RatioMin => self.min_ratio.is_none_or(|min| ratio > min),
        }
    }

    /// Constraints the given ratio currently violates, in evaluation order.
    pub fn violations(
        &self,
        ratio: f64,
        usable_width: f64,
    ) -> impl Iterator<Item = BoundaryConstraint> + '_ {
        BoundaryConstraint::ALL
            .into_iter()
            .filter(move |&c| !self.is_satisfied(c, ratio, usable_width))
    }
}

/// The six soft constraints, in the order the policy evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryConstraint {
    LeftMax,
    LeftMin,
    RightMax,
    RightMin,
    RatioMax,
    RatioMin,
}

impl BoundaryConstraint {
    /// Evaluation order.
    pub const ALL: [Self; 6] = [
        Self::LeftMax,
        Self::LeftMin,
        Self::RightMax,
        Self::RightMin,
        Self::RatioMax,
        Self::RatioMin,
    ];

    /// The only direction admitted while this constraint is violated.
    #[must_use]
    pub const fn correcting_direction(self) -> MoveDirection {
        match self {
            Self::LeftMax | Self::RightMin | Self::RatioMax => MoveDirection::TowardLeft,
            Self::LeftMin | Self::RightMax | Self::RatioMin => MoveDirection::TowardRight,
        }
    }

    /// Stable name for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftMax => "left_max_width",
            Self::LeftMin => "left_min_width",
            Self::RightMax => "right_max_width",
            Self::RightMin => "right_min_width",
            Self::RatioMax => "max_ratio",
            Self::RatioMin => "min_ratio",
        }
    }
}

impl fmt::Display for BoundaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a candidate move relative to the current divider position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Candidate is left of the divider: the left pane shrinks.
    TowardLeft,
    /// Candidate is right of the divider: the left pane grows.
    TowardRight,
    /// Candidate sits exactly on the divider.
    Stationary,
}

impl MoveDirection {
    /// Classify a local offset against the current divider position.
    #[must_use]
    pub fn classify(local_offset: f64, divider_position: f64) -> Self {
        if local_offset < divider_position {
            Self::TowardLeft
        } else if local_offset > divider_position {
            Self::TowardRight
        } else {
            Self::Stationary
        }
    }
}

/// Why the policy refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rejection", rename_all = "snake_case")]
pub enum MoveRejection {
    /// The absolute pointer position is outside the container.
    OutsideContainer,
    /// A constraint is already violated and the move does not reduce it.
    WrongDirection {
        constraint: BoundaryConstraint,
        direction: MoveDirection,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideContainer => f.write_str("pointer outside container"),
            Self::WrongDirection {
                constraint,
                direction,
            } => write!(
                f,
                "{constraint} violated; move {direction:?} does not reduce it"
            ),
        }
    }
}

/// Inputs to one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveProposal {
    /// Ratio before the move.
    pub ratio: f64,
    /// Usable width the ratio refers to.
    pub usable_width: f64,
    /// Container the pointer must stay in.
    pub bounds: ContainerBounds,
    /// Absolute pointer position of the candidate.
    pub pointer_x: f64,
}

impl MoveProposal {
    #[must_use]
    pub const fn new(ratio: f64, usable_width: f64, bounds: ContainerBounds, pointer_x: f64) -> Self {
        Self {
            ratio,
            usable_width,
            bounds,
            pointer_x,
        }
    }

    /// Candidate position relative to the container's left edge.
    #[must_use]
    pub fn local_offset(&self) -> f64 {
        self.bounds.local(self.pointer_x)
    }

    /// Current divider position relative to the container's left edge.
    #[must_use]
    pub fn divider_position(&self) -> f64 {
        pixel_width_for_ratio(self.ratio, self.usable_width)
    }

    /// Direction of the candidate relative to the current divider.
    #[must_use]
    pub fn direction(&self) -> MoveDirection {
        MoveDirection::classify(self.local_offset(), self.divider_position())
    }
}

/// Evaluate a proposal, returning its direction when admitted.
///
/// The container check runs first, then the constraints in
/// [`BoundaryConstraint::ALL`] order; the first failure is reported.
pub fn evaluate_move(
    constraints: &ConstraintSet,
    proposal: &MoveProposal,
) -> Result<MoveDirection, MoveRejection> {
    if !proposal.bounds.contains(proposal.pointer_x) {
        return Err(MoveRejection::OutsideContainer);
    }

    let direction = proposal.direction();
    for constraint in constraints.violations(proposal.ratio, proposal.usable_width) {
        if direction != constraint.correcting_direction() {
            return Err(MoveRejection::WrongDirection {
                constraint,
                direction,
            });
        }
    }
    Ok(direction)
}

/// Boolean form of [`evaluate_move`].
#[must_use]
pub fn admits_move(constraints: &ConstraintSet, proposal: &MoveProposal) -> bool {
    evaluate_move(constraints, proposal).is_ok()
}
