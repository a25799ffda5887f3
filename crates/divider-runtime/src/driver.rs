#![forbid(unsafe_code)]

//! Adapter-facing driver tying a split to its rate limiter and subscriptions.
//!
//! [`SplitDriver`] is what a host adapter talks to:
//!
//! 1. Register release actions for the host subscriptions with
//!    [`subscribe`](SplitDriver::subscribe).
//! 2. Forward every host event to [`handle`](SplitDriver::handle) with the
//!    current time, and call [`tick`](SplitDriver::tick) when the limiter's
//!    deadline passes.
//! 3. Call [`teardown`](SplitDriver::teardown) when the split goes away.
//!
//! Pointer moves go through the [`PointerRateLimiter`]. Any other event first
//! flushes a held move, so the split sees events in delivery order.

use divider_core::event::SplitInputEvent;
use divider_layout::{SplitConfig, SplitObserver, SplitPane, SplitTransition};
use web_time::Instant;

use crate::rate_limit::{PointerRateLimiter, RateLimitConfig};
use crate::scope::{Channel, SubscriptionScope};

/// Transitions produced by one [`SplitDriver::handle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dispatch {
    /// A held pointer move delivered ahead of the event.
    pub flushed: Option<SplitTransition>,
    /// The event itself, unless the limiter held it.
    pub applied: Option<SplitTransition>,
}

impl Dispatch {
    /// Transitions in the order they happened.
    pub fn iter(&self) -> impl Iterator<Item = &SplitTransition> {
        self.flushed.iter().chain(self.applied.iter())
    }

    /// Whether the event was held back by the limiter.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.applied.is_none()
    }
}

/// A split plus the adapter plumbing around it.
#[derive(Debug)]
pub struct SplitDriver<O = ()> {
    pane: SplitPane<O>,
    limiter: PointerRateLimiter,
    scope: SubscriptionScope,
}

impl<O: SplitObserver> SplitDriver<O> {
    #[must_use]
    pub fn new(pane: SplitPane<O>, rate_limit: RateLimitConfig) -> Self {
        Self {
            pane,
            limiter: PointerRateLimiter::new(rate_limit),
            scope: SubscriptionScope::new(),
        }
    }

    /// Build a split from config, rate limited per `DIVIDER_POINTER_INTERVAL_MS`.
    #[must_use]
    pub fn from_config(config: SplitConfig, observer: O) -> Self {
        Self::new(SplitPane::new(config, observer), RateLimitConfig::from_env())
    }

    #[must_use]
    pub const fn pane(&self) -> &SplitPane<O> {
        &self.pane
    }

    pub fn pane_mut(&mut self) -> &mut SplitPane<O> {
        &mut self.pane
    }

    #[must_use]
    pub const fn limiter(&self) -> &PointerRateLimiter {
        &self.limiter
    }

    #[must_use]
    pub const fn scope(&self) -> &SubscriptionScope {
        &self.scope
    }

    /// Hand over the release action of a host subscription.
    pub fn subscribe(&mut self, channel: Channel, release: impl FnOnce() + 'static) {
        self.scope.register(channel, release);
    }

    /// Deliver one host event.
    pub fn handle(&mut self, event: SplitInputEvent, now: Instant) -> Dispatch {
        if let SplitInputEvent::PointerMove { x } = event {
            return Dispatch {
                flushed: None,
                applied: self.limiter.offer(x, now).map(|x| self.pane.pointer_move(x)),
            };
        }

        let flushed = self.limiter.flush().map(|x| self.pane.pointer_move(x));
        Dispatch {
            flushed,
            applied: Some(self.pane.apply_event(&event)),
        }
    }

    /// Deliver a held pointer move whose interval has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<SplitTransition> {
        self.limiter.poll(now).map(|x| self.pane.pointer_move(x))
    }

    /// When [`tick`](Self::tick) should next be called, if a move is held.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.limiter.next_deadline()
    }

    /// Release subscriptions, drop any held move and tear the split down.
    ///
    /// Idempotent: later calls release nothing and report a no-op.
    pub fn teardown(&mut self) -> SplitTransition {
        let released = self.scope.teardown();
        self.limiter.clear();
        if released > 0 {
            tracing::debug!(released, "split driver released subscriptions");
        }
        self.pane.teardown()
    }
}
