//! Watchdog state and metrics snapshots.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Snapshot of a watchdog's transient state.
///
/// Only `setup`, `enable` and `disable` change it (plus the dummy loop
/// marking itself stopped when it exits). Nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WatchdogState {
    /// Whether keepalives are currently being reported.
    pub ready: bool,
    /// Reporting interval the watchdog works with.
    pub interval: Duration,
}

/// Snapshot of watchdog activity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WatchdogMetrics {
    /// Keepalives delivered (loop signals taken, datagrams fully written).
    pub keepalives: u64,
    /// Control signals dropped because the receiver could not take them.
    pub dropped_signals: u64,
    /// `not_ok` calls.
    pub not_ok: u64,
    /// Keepalive deadlines missed.
    pub timeouts: u64,
    /// Datagram writes that failed or came up short.
    pub write_failures: u64,
}

/// Lock-free counters behind [`WatchdogMetrics`].
///
/// Shared between a watchdog and its background loop, so every update is a
/// single relaxed atomic add.
#[derive(Debug, Default)]
pub struct MetricsCounters {
    keepalives: AtomicU64,
    dropped_signals: AtomicU64,
    not_ok: AtomicU64,
    timeouts: AtomicU64,
    write_failures: AtomicU64,
}

impl MetricsCounters {
    /// Create zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a delivered keepalive.
    pub fn record_keepalive(&self) {
        self.keepalives.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a dropped control signal.
    pub fn record_dropped_signal(&self) {
        self.dropped_signals.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a `not_ok` call.
    pub fn record_not_ok(&self) {
        self.not_ok.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a missed keepalive deadline.
    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed or short write.
    pub fn record_write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> WatchdogMetrics {
        WatchdogMetrics {
            keepalives: self.keepalives.load(Ordering::Relaxed),
            dropped_signals: self.dropped_signals.load(Ordering::Relaxed),
            not_ok: self.not_ok.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = MetricsCounters::new();
        assert_eq!(counters.snapshot(), WatchdogMetrics::default());
    }

    #[test]
    fn test_counters_record_independently() {
        let counters = MetricsCounters::new();
        counters.record_keepalive();
        counters.record_keepalive();
        counters.record_not_ok();
        counters.record_timeout();
        counters.record_dropped_signal();
        counters.record_write_failure();

        let metrics = counters.snapshot();
        assert_eq!(metrics.keepalives, 2);
        assert_eq!(metrics.not_ok, 1);
        assert_eq!(metrics.timeouts, 1);
        assert_eq!(metrics.dropped_signals, 1);
        assert_eq!(metrics.write_failures, 1);
    }

    #[test]
    fn test_state_serializes() -> Result<(), serde_json::Error> {
        let state = WatchdogState {
            ready: true,
            interval: Duration::from_secs(90),
        };
        let json = serde_json::to_string(&state)?;
        let back: WatchdogState = serde_json::from_str(&json)?;
        assert_eq!(back, state);
        Ok(())
    }
}
