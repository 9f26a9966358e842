#![expect(
    clippy::module_name_repetitions,
    reason = "Configuration types intentionally mirror the module name for clarity"
)]

use std::time::Duration;

const DEFAULT_HEARTBEAT_INTERVAL_DURATION: Duration = Duration::from_secs(30);
const DEFAULT_INITIAL_DELAY_DURATION: Duration = Duration::from_secs(1);
const DEFAULT_MAX_DELAY_DURATION: Duration = Duration::from_secs(30);
const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Configuration for streaming connection behavior.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to send application-level ping frames while connected
    pub heartbeat: bool,
    /// Interval between application-level ping frames while connected
    pub heartbeat_interval: Duration,
    /// Reconnection strategy applied after an unexpected close
    pub reconnect: ReconnectPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heartbeat: true,
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL_DURATION,
            reconnect: ReconnectPolicy::default(),
        }
    }
}

/// Deterministic exponential backoff for reconnection attempts.
///
/// The delay before attempt `n` (counting from 1) doubles each time, starting
/// at [`initial_delay`](Self::initial_delay) and saturating at
/// [`max_delay`](Self::max_delay). With the defaults that yields 1s, 2s, 4s,
/// 8s, 16s, then 30s for every attempt after.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    /// Number of consecutive failed attempts after which reconnection stops
    pub max_attempts: u32,
    /// Delay before the first reconnection attempt
    pub initial_delay: Duration,
    /// Ceiling applied to the doubled delay
    pub max_delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: DEFAULT_INITIAL_DELAY_DURATION,
            max_delay: DEFAULT_MAX_DELAY_DURATION,
        }
    }
}

impl ReconnectPolicy {
    /// Returns the delay to wait before reconnection attempt `attempt`.
    ///
    /// Attempts count from 1; an attempt of 0 is treated as 1. The schedule is
    /// pure so the same attempt number always maps to the same delay,
    /// independent of wall-clock time or prior calls.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial_delay
            .saturating_mul(1_u32 << exponent)
            .min(self.max_delay)
    }
}
