#![forbid(unsafe_code)]

//! Scoped event subscriptions with explicit teardown.
//!
//! The adapter subscribes to host events (window-level pointer moves and
//! releases, container resize notifications) and hands the matching release
//! action to a [`SubscriptionScope`]. Teardown runs every release exactly
//! once, so a torn-down split never sees another event. Dropping the scope
//! tears it down too.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use divider_runtime::scope::{Channel, SubscriptionScope};
//!
//! let released = Rc::new(Cell::new(0));
//! let mut scope = SubscriptionScope::new();
//! for channel in [Channel::PointerMove, Channel::PointerUp] {
//!     let released = Rc::clone(&released);
//!     scope.register(channel, move || released.set(released.get() + 1));
//! }
//!
//! assert_eq!(scope.teardown(), 2);
//! assert_eq!(scope.teardown(), 0);
//! assert_eq!(released.get(), 2);
//! ```

use std::fmt;

/// Host event stream a subscription belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    PointerMove,
    PointerUp,
    ContainerResize,
}

impl Channel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PointerMove => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::ContainerResize => "container_resize",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Release = Box<dyn FnOnce()>;

/// Owner of the adapter's release actions.
#[derive(Default)]
pub struct SubscriptionScope {
    active: Vec<(Channel, Release)>,
    torn_down: bool,
}

impl SubscriptionScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the release action for a live subscription.
    ///
    /// Registering on a torn-down scope releases immediately.
    pub fn register(&mut self, channel: Channel, release: impl FnOnce() + 'static) {
        if self.torn_down {
            tracing::debug!(%channel, "subscription registered after teardown; releasing");
            release();
            return;
        }
        tracing::debug!(%channel, "subscription registered");
        self.active.push((channel, Box::new(release)));
    }

    /// Whether a subscription on `channel` is live.
    #[must_use]
    pub fn is_subscribed(&self, channel: Channel) -> bool {
        self.active.iter().any(|(c, _)| *c == channel)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Release every live subscription, in registration order.
    ///
    /// Returns how many were released; later calls return 0.
    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        let released = self.active.len();
        for (channel, release) in self.active.drain(..) {
            tracing::debug!(%channel, "releasing subscription");
            release();
        }
        released
    }
}

impl fmt::Debug for SubscriptionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels: Vec<Channel> = self.active.iter().map(|(c, _)| *c).collect();
        f.debug_struct("SubscriptionScope")
            .field("active", &channels)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.teardown();
    }
}
