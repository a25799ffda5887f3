#![forbid(unsafe_code)]

//! Optional subscriber installation for hosts without their own.
//!
//! Libraries never install a subscriber; a host that wants the split's
//! `tracing` events as JSON lines calls [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "DIVIDER_LOG";

/// Filter used when `DIVIDER_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `DIVIDER_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a JSON fmt subscriber.
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}

