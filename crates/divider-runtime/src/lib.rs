#![forbid(unsafe_code)]

//! Runtime: the adapter side of a Divider split.
//!
//! `divider-layout` decides; this crate handles delivery. [`rate_limit`]
//! bounds how often pointer moves reach the split, [`scope`] owns the host
//! subscriptions and releases them on teardown, and [`driver`] ties both to a
//! [`SplitPane`](divider_layout::SplitPane).
//!
//! Enable the `tracing-json` feature for [`logging::init`].

pub mod driver;
#[cfg(feature = "tracing-json")]
pub mod logging;
pub mod rate_limit;
pub mod scope;

pub use driver::{Dispatch, SplitDriver};
pub use rate_limit::{
    DEFAULT_POINTER_INTERVAL_MS, MAX_POINTER_INTERVAL_MS, POINTER_INTERVAL_ENV,
    PointerRateLimiter, RateLimitConfig,
};
pub use scope::{Channel, SubscriptionScope};
