#![forbid(unsafe_code)]

//! Layout: the constraint-driven engine behind a two-pane divider.
//!
//! # Role in Divider
//! `divider-layout` holds every piece of decision logic:
//!
//! - [`constraint`]: the directional boundary policy that admits or rejects a
//!   candidate pointer position.
//! - [`defaults`]: one-time derivation of the starting ratio.
//! - [`split`]: the `Idle`/`Dragging` state machine that owns the ratio and
//!   notifies observers.
//! - [`config`]: the same settings as loadable data.
//!
//! Host event wiring, rate limiting and subscription teardown live in
//! `divider-runtime`.

pub mod config;
pub mod constraint;
pub mod defaults;
pub mod split;

pub use config::{DEFAULT_DIVIDER_WIDTH, SplitConfig, SplitConfigError};
pub use constraint::{
    BoundaryConstraint, ConstraintSet, MoveDirection, MoveProposal, MoveRejection, admits_move,
    evaluate_move,
};
pub use defaults::{DEFAULT_RATIO, DefaultSource, DefaultSpec};
pub use divider_core::event::SplitInputEvent;
pub use divider_core::geometry::{ContainerBounds, LimitKind};
pub use split::{
    SplitCallbacks, SplitDragState, SplitEffect, SplitLayout, SplitNoopReason, SplitObserver,
    SplitPane, SplitTransition,
};
