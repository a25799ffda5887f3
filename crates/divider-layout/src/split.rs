#![forbid(unsafe_code)]

//! Drag state machine for a two-pane split.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up--> Idle
//!   \                       |
//!    \-- pointer_move: noop  \-- pointer_move: boundary policy, maybe new ratio
//! ```
//!
//! [`SplitPane`] owns the drag state, the ratio and the last container
//! measurement. Every operation returns a [`SplitTransition`] describing what
//! happened, and admitted changes are pushed synchronously to a
//! [`SplitObserver`].
//!
//! The ratio is unseeded until the first container measurement with a
//! positive usable width. That measurement seeds it from [`DefaultSpec`];
//! afterwards only admitted pointer moves change it. Later resizes keep the
//! ratio and report the rescaled pane widths.
//!
//! Nothing here fails. Events that make no sense in the current state are
//! reported as [`SplitEffect::Noop`] and otherwise ignored.
//!
//! ```
//! use divider_layout::{SplitConfig, SplitPane};
//!
//! let mut split = SplitPane::new(SplitConfig::default(), ());
//! split.container_resize(0.0, 500.0);
//! assert_eq!(split.ratio(), Some(50.0));
//! assert_eq!(split.usable_width(), 498.0);
//!
//! split.pointer_down();
//! split.pointer_move(124.5);
//! split.pointer_up();
//! assert_eq!(split.ratio(), Some(25.0));
//! ```

use std::fmt;

use divider_core::event::SplitInputEvent;
use divider_core::geometry::{
    ContainerBounds, RATIO_SCALE, pixel_width_for_ratio, ratio_for_pixel_width,
};
use serde::{Deserialize, Serialize};

use crate::config::SplitConfig;
use crate::constraint::{ConstraintSet, MoveDirection, MoveProposal, MoveRejection, evaluate_move};
use crate::defaults::{DefaultSource, DefaultSpec};

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDragState {
    #[default]
    Idle,
    Dragging,
}

/// Ratio plus the pane widths it implies at the current usable width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitLayout {
    /// Left pane share in percent.
    pub ratio: f64,
    /// Container width minus divider width.
    pub usable_width: f64,
    /// Left pane width in pixels.
    pub left_width: f64,
    /// Right pane width in pixels.
    pub right_width: f64,
}

impl SplitLayout {
    #[must_use]
    pub fn new(ratio: f64, usable_width: f64) -> Self {
        Self {
            ratio,
            usable_width,
            left_width: pixel_width_for_ratio(ratio, usable_width),
            right_width: pixel_width_for_ratio(RATIO_SCALE - ratio, usable_width),
        }
    }
}

/// Why an event was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitNoopReason {
    /// Pointer move or up without a drag in progress.
    IdleWithoutActiveDrag,
    /// Pointer down while already dragging.
    ActiveDragAlreadyInProgress,
    /// Pointer move before the first usable container measurement.
    Unmeasured,
    /// Resize whose usable width is not positive.
    DegenerateContainer,
    /// Any event after teardown.
    TornDown,
}

/// Outcome of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitEffect {
    DragStarted,
    DragFinished,
    /// An admitted pointer move stored a new ratio.
    RatioChanged {
        layout: SplitLayout,
        direction: MoveDirection,
    },
    /// First usable measurement seeded the ratio.
    Seeded {
        layout: SplitLayout,
        source: DefaultSource,
    },
    /// Later measurement rescaled the panes around the stored ratio.
    Resized { layout: SplitLayout },
    /// The boundary policy refused a pointer move.
    Rejected { rejection: MoveRejection },
    /// Teardown ran; the split ignores all further input.
    TornDown,
    Noop { reason: SplitNoopReason },
}

/// One state-machine step with telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitTransition {
    /// Monotonic per-split counter, starting at 1.
    pub transition_id: u64,
    pub from: SplitDragState,
    pub to: SplitDragState,
    pub effect: SplitEffect,
}

impl SplitTransition {
    /// Layout reported to the observer by this step, if any.
    #[must_use]
    pub fn layout(&self) -> Option<SplitLayout> {
        match self.effect {
            SplitEffect::RatioChanged { layout, .. }
            | SplitEffect::Seeded { layout, .. }
            | SplitEffect::Resized { layout } => Some(layout),
            _ => None,
        }
    }

    /// Whether the step changed nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(
            self.effect,
            SplitEffect::Noop { .. } | SplitEffect::Rejected { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Observers
// ---------------------------------------------------------------------------

/// Receives split notifications, synchronously and in delivery order.
///
/// Every method defaults to doing nothing.
pub trait SplitObserver {
    /// A drag began.
    fn on_drag_start(&mut self) {}

    /// A drag ended.
    fn on_drag_finish(&mut self) {}

    /// The ratio was seeded, moved, or rescaled by a resize.
    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        let _ = layout;
    }
}

/// Silent observer.
impl SplitObserver for () {}

impl<O: SplitObserver + ?Sized> SplitObserver for &mut O {
    fn on_drag_start(&mut self) {
        (**self).on_drag_start();
    }

    fn on_drag_finish(&mut self) {
        (**self).on_drag_finish();
    }

    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        (**self).on_ratio_change(layout);
    }
}

impl<O: SplitObserver + ?Sized> SplitObserver for Box<O> {
    fn on_drag_start(&mut self) {
        (**self).on_drag_start();
    }

    fn on_drag_finish(&mut self) {
        (**self).on_drag_finish();
    }

    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        (**self).on_ratio_change(layout);
    }
}

type Callback = Box<dyn FnMut()>;
type LayoutCallback = Box<dyn FnMut(&SplitLayout)>;

/// Observer assembled from closures.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use divider_layout::{SplitCallbacks, SplitConfig, SplitPane};
///
/// let last = Rc::new(Cell::new(0.0));
/// let sink = Rc::clone(&last);
/// let callbacks = SplitCallbacks::new().with_ratio_change(move |layout| sink.set(layout.ratio));
///
/// let mut split = SplitPane::new(SplitConfig::default(), callbacks);
/// split.container_resize(0.0, 302.0);
/// assert_eq!(last.get(), 50.0);
/// ```
#[derive(Default)]
pub struct SplitCallbacks {
    drag_start: Option<Callback>,
    drag_finish: Option<Callback>,
    ratio_change: Option<LayoutCallback>,
}

impl SplitCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.drag_start = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_drag_finish(mut self, f: impl FnMut() + 'static) -> Self {
        self.drag_finish = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_ratio_change(mut self, f: impl FnMut(&SplitLayout) + 'static) -> Self {
        self.ratio_change = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for SplitCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitCallbacks")
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_finish", &self.drag_finish.is_some())
            .field("ratio_change", &self.ratio_change.is_some())
            .finish()
    }
}

impl SplitObserver for SplitCallbacks {
    fn on_drag_start(&mut self) {
        if let Some(f) = self.drag_start.as_mut() {
            f();
        }
    }

    fn on_drag_finish(&mut self) {
        if let Some(f) = self.drag_finish.as_mut() {
            f();
        }
    }

    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        if let Some(f) = self.ratio_change.as_mut() {
            f(layout);
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Constraint-driven split between two panes.
#[derive(Debug)]
pub struct SplitPane<O = ()> {
    config: SplitConfig,
    observer: O,
    state: SplitDragState,
    ratio: Option<f64>,
    bounds: ContainerBounds,
    usable_width: f64,
    torn_down: bool,
    transition_counter: u64,
}

impl<O: SplitObserver> SplitPane<O> {
    /// Create an unseeded, idle split.
    pub fn new(config: SplitConfig, observer: O) -> Self {
        Self {
            config,
            observer,
            state: SplitDragState::Idle,
            ratio: None,
            bounds: ContainerBounds::default(),
            usable_width: 0.0,
            torn_down: false,
            transition_counter: 0,
        }
    }

    /// Current drag state.
    #[must_use]
    pub const fn state(&self) -> SplitDragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, SplitDragState::Dragging)
    }

    /// Stored ratio, `None` until the first usable measurement.
    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    /// Usable width from the last accepted measurement.
    #[must_use]
    pub const fn usable_width(&self) -> f64 {
        self.usable_width
    }

    /// Container bounds from the last accepted measurement.
    #[must_use]
    pub const fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    /// Current layout, once seeded.
    #[must_use]
    pub fn layout(&self) -> Option<SplitLayout> {
        self.ratio
            .map(|ratio| SplitLayout::new(ratio, self.usable_width))
    }

    #[must_use]
    pub const fn config(&self) -> &SplitConfig {
        &self.config
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.config.constraints
    }

    #[must_use]
    pub const fn defaults(&self) -> &DefaultSpec {
        &self.config.defaults
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Replace the constraint set.
    ///
    /// The stored ratio is untouched; if it now violates a bound, the policy
    /// steers the next drag back toward it.
    pub fn set_constraints(&mut self, constraints: ConstraintSet) {
        self.config.constraints = constraints;
    }

    /// Begin a drag.
    pub fn pointer_down(&mut self) -> SplitTransition {
        let from = self.state;
        if self.torn_down {
            return self.noop(SplitNoopReason::TornDown);
        }
        if self.is_dragging() {
            return self.noop(SplitNoopReason::ActiveDragAlreadyInProgress);
        }

        self.state = SplitDragState::Dragging;
        tracing::debug!(ratio = ?self.ratio, "split drag started");
        self.observer.on_drag_start();
        self.transition(from, SplitEffect::DragStarted)
    }

    /// Offer a new absolute pointer position.
    pub fn pointer_move(&mut self, pointer_x: f64) -> SplitTransition {
        if self.torn_down {
            return self.noop(SplitNoopReason::TornDown);
        }
        if !self.is_dragging() {
            return self.noop(SplitNoopReason::IdleWithoutActiveDrag);
        }
        let Some(ratio) = self.ratio else {
            return self.noop(SplitNoopReason::Unmeasured);
        };

        let proposal = MoveProposal::new(ratio, self.usable_width, self.bounds, pointer_x);
        match evaluate_move(&self.config.constraints, &proposal) {
            Ok(direction) => {
                let ratio = ratio_for_pixel_width(proposal.local_offset(), self.usable_width);
                self.ratio = Some(ratio);
                let layout = SplitLayout::new(ratio, self.usable_width);
                tracing::trace!(pointer_x, ratio, ?direction, "split move admitted");
                self.observer.on_ratio_change(&layout);
                self.transition(self.state, SplitEffect::RatioChanged { layout, direction })
            }
            Err(rejection) => {
                tracing::trace!(pointer_x, ratio, %rejection, "split move rejected");
                self.transition(self.state, SplitEffect::Rejected { rejection })
            }
        }
    }

    /// End a drag.
    pub fn pointer_up(&mut self) -> SplitTransition {
        let from = self.state;
        if self.torn_down {
            return self.noop(SplitNoopReason::TornDown);
        }
        if !self.is_dragging() {
            return self.noop(SplitNoopReason::IdleWithoutActiveDrag);
        }

        self.state = SplitDragState::Idle;
        tracing::debug!(ratio = ?self.ratio, "split drag finished");
        self.observer.on_drag_finish();
        self.transition(from, SplitEffect::DragFinished)
    }

    /// Record a new container measurement.
    ///
    /// The first measurement with a positive usable width seeds the ratio;
    /// later ones keep it and report the rescaled widths.
    pub fn container_resize(&mut self, container_x: f64, container_width: f64) -> SplitTransition {
        if self.torn_down {
            return self.noop(SplitNoopReason::TornDown);
        }
        let bounds = ContainerBounds::new(container_x, container_width);
        let usable_width = bounds.usable_width(self.config.divider_width);
        if usable_width <= 0.0 {
            tracing::debug!(
                container_width,
                divider_width = self.config.divider_width,
                "split ignored degenerate container"
            );
            return self.noop(SplitNoopReason::DegenerateContainer);
        }

        self.bounds = bounds;
        self.usable_width = usable_width;

        let effect = match self.ratio {
            Some(ratio) => SplitEffect::Resized {
                layout: SplitLayout::new(ratio, usable_width),
            },
            None => {
                let (ratio, source) = self.config.defaults.initial_ratio(usable_width);
                self.ratio = Some(ratio);
                tracing::debug!(ratio, usable_width, ?source, "split ratio seeded");
                SplitEffect::Seeded {
                    layout: SplitLayout::new(ratio, usable_width),
                    source,
                }
            }
        };
        if let SplitEffect::Seeded { layout, .. } | SplitEffect::Resized { layout } = &effect {
            self.observer.on_ratio_change(layout);
        }
        self.transition(self.state, effect)
    }

    /// Dispatch a canonical input event.
    pub fn apply_event(&mut self, event: &SplitInputEvent) -> SplitTransition {
        match *event {
            SplitInputEvent::PointerDown => self.pointer_down(),
            SplitInputEvent::PointerMove { x } => self.pointer_move(x),
            SplitInputEvent::PointerUp => self.pointer_up(),
            SplitInputEvent::ContainerResize { x, width } => self.container_resize(x, width),
        }
    }

    /// Stop reacting to input. Idempotent.
    ///
    /// An in-progress drag is dropped without notifying the observer; the
    /// ratio keeps its last value.
    pub fn teardown(&mut self) -> SplitTransition {
        if self.torn_down {
            return self.noop(SplitNoopReason::TornDown);
        }
        let from = self.state;
        self.torn_down = true;
        self.state = SplitDragState::Idle;
        tracing::debug!(was_dragging = from == SplitDragState::Dragging, "split torn down");
        self.transition(from, SplitEffect::TornDown)
    }

    fn noop(&mut self, reason: SplitNoopReason) -> SplitTransition {
        self.transition(self.state, SplitEffect::Noop { reason })
    }

    fn transition(&mut self, from: SplitDragState, effect: SplitEffect) -> SplitTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        SplitTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state,
            effect,
        }
    }
}

impl Default for SplitPane<()> {
    fn default() -> Self {
        Self::new(SplitConfig::default(), ())
    }
}
