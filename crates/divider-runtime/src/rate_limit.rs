#![forbid(unsafe_code)]

//! Rate limiting for high-frequency pointer moves.
//!
//! Hosts can deliver pointer moves far faster than anyone can see the divider
//! follow. [`PointerRateLimiter`] bounds how often moves reach the split:
//!
//! - A move arriving at least `min_interval` after the previous delivery
//!   passes straight through.
//! - A move arriving sooner is held; a later one replaces it (latest wins).
//! - [`poll`](PointerRateLimiter::poll) releases the held move once the
//!   interval has elapsed, and [`flush`](PointerRateLimiter::flush) releases
//!   it unconditionally so non-move events never overtake it.
//!
//! The split itself stays correct at any rate; this is purely a cost bound.
//!
//! ```
//! use web_time::{Duration, Instant};
//! use divider_runtime::rate_limit::{PointerRateLimiter, RateLimitConfig};
//!
//! let mut limiter = PointerRateLimiter::new(RateLimitConfig::default());
//! let t0 = Instant::now();
//!
//! assert_eq!(limiter.offer(10.0, t0), Some(10.0));
//! assert_eq!(limiter.offer(11.0, t0 + Duration::from_millis(1)), None);
//! assert_eq!(limiter.offer(12.0, t0 + Duration::from_millis(2)), None);
//! assert_eq!(limiter.poll(t0 + Duration::from_millis(6)), Some(12.0));
//! ```

use web_time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Configuration Constants
// ---------------------------------------------------------------------------

/// Default minimum gap between delivered pointer moves.
pub const DEFAULT_POINTER_INTERVAL_MS: u64 = 5;

/// Largest accepted interval; anything slower visibly lags the pointer.
pub const MAX_POINTER_INTERVAL_MS: u64 = 100;

/// Environment variable overriding the interval, in milliseconds.
pub const POINTER_INTERVAL_ENV: &str = "DIVIDER_POINTER_INTERVAL_MS";

/// Rate limiter settings.
///
/// | Field | Default | Range |
/// |-------|---------|-------|
/// | `min_interval` | 5ms | 0-100ms (0 disables limiting) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Minimum time between two delivered moves.
    pub min_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(DEFAULT_POINTER_INTERVAL_MS),
        }
    }
}

impl RateLimitConfig {
    /// Config that delivers every move immediately.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            min_interval: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }

    /// Create config from environment variables.
    ///
    /// Reads `DIVIDER_POINTER_INTERVAL_MS`. Unparseable values are ignored;
    /// the result is clamped to the valid range.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var(POINTER_INTERVAL_ENV)
            && let Ok(ms) = val.trim().parse::<u64>()
        {
            config.min_interval = Duration::from_millis(ms);
        }

        config.validated()
    }

    /// Clamp the interval to `0..=100ms`.
    #[must_use]
    pub fn validated(mut self) -> Self {
        let max = Duration::from_millis(MAX_POINTER_INTERVAL_MS);
        if self.min_interval > max {
            tracing::warn!(
                requested_ms = self.min_interval.as_millis() as u64,
                max_ms = MAX_POINTER_INTERVAL_MS,
                "pointer interval clamped"
            );
            self.min_interval = max;
        }
        self
    }

    /// Whether limiting is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.min_interval.is_zero()
    }
}

/// Latest-wins limiter for pointer move positions.
///
/// Not thread-safe; drive it from the thread that delivers input.
#[derive(Debug, Clone)]
pub struct PointerRateLimiter {
    config: RateLimitConfig,
    last_delivered: Option<Instant>,
    pending: Option<f64>,
    coalesced: u64,
}

impl PointerRateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            last_delivered: None,
            pending: None,
            coalesced: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Offer a move. Returns the position to deliver now, if any.
    pub fn offer(&mut self, pointer_x: f64, now: Instant) -> Option<f64> {
        if self.is_due(now) {
            self.pending = None;
            self.last_delivered = Some(now);
            return Some(pointer_x);
        }
        if self.pending.replace(pointer_x).is_some() {
            self.coalesced = self.coalesced.saturating_add(1);
        }
        None
    }

    /// Release the held move if its interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        if self.pending.is_none() || !self.is_due(now) {
            return None;
        }
        self.last_delivered = Some(now);
        self.pending.take()
    }

    /// Release the held move regardless of timing.
    pub fn flush(&mut self) -> Option<f64> {
        self.pending.take()
    }

    /// Drop the held move.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Position currently held back.
    #[must_use]
    pub const fn pending(&self) -> Option<f64> {
        self.pending
    }

    /// Moves replaced by a newer one before delivery.
    #[must_use]
    pub const fn coalesced_count(&self) -> u64 {
        self.coalesced
    }

    /// When the held move becomes deliverable, for scheduling a timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending?;
        Some(match self.last_delivered {
            Some(last) => last + self.config.min_interval,
            None => Instant::now(),
        })
    }

    fn is_due(&self, now: Instant) -> bool {
        match self.last_delivered {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.config.min_interval,
        }
    }
}

impl Default for PointerRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
