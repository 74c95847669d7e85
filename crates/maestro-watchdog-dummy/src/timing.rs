//! Loop timing for the dummy watchdog.

use std::time::Duration;

use maestro_watchdog::{WatchdogError, WatchdogResult};

/// How long the loop waits for a keepalive before reporting a timeout.
pub const INTERNAL_INTERVAL: Duration = Duration::from_secs(15);

/// Headroom subtracted from the interval when advertising the critical interval.
pub const SAFETY_BUFFER: Duration = Duration::from_secs(5);

/// Wait used after a timeout until the next signal arrives.
pub const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Timing knobs for the dummy loop.
///
/// The defaults are what the host sees in production. Tests shrink them to
/// milliseconds so timeouts can be observed quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DummyTiming {
    /// Keepalive deadline.
    pub interval: Duration,
    /// Subtracted from `interval` for the advertised critical interval.
    pub safety_buffer: Duration,
    /// Shortened wait after a missed deadline.
    pub retry_interval: Duration,
}

impl DummyTiming {
    /// Create validated timing.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` or `retry_interval` is zero, or if the
    /// safety buffer would eat the whole interval.
    pub fn new(
        interval: Duration,
        safety_buffer: Duration,
        retry_interval: Duration,
    ) -> WatchdogResult<Self> {
        if interval.is_zero() {
            return Err(WatchdogError::invalid_configuration(
                "interval must be greater than 0",
            ));
        }
        if retry_interval.is_zero() {
            return Err(WatchdogError::invalid_configuration(
                "retry_interval must be greater than 0",
            ));
        }
        if safety_buffer >= interval {
            return Err(WatchdogError::invalid_configuration(
                "safety_buffer must be shorter than interval",
            ));
        }
        Ok(Self {
            interval,
            safety_buffer,
            retry_interval,
        })
    }

    /// Longest gap the host may leave between keepalives.
    #[must_use]
    pub fn critical_interval(&self) -> Duration {
        self.interval.saturating_sub(self.safety_buffer)
    }
}

impl Default for DummyTiming {
    fn default() -> Self {
        Self {
            interval: INTERNAL_INTERVAL,
            safety_buffer: SAFETY_BUFFER,
            retry_interval: RETRY_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_critical_interval() {
        let timing = DummyTiming::default();
        assert_eq!(timing.critical_interval(), Duration::from_secs(10));
        assert_eq!(timing.retry_interval, Duration::from_secs(2));
    }

    #[test]
    fn test_validation() {
        let ms = Duration::from_millis;
        assert!(DummyTiming::new(ms(0), ms(0), ms(1)).is_err());
        assert!(DummyTiming::new(ms(10), ms(0), ms(0)).is_err());
        assert!(DummyTiming::new(ms(10), ms(10), ms(1)).is_err());

        let timing = DummyTiming::new(ms(100), ms(30), ms(20));
        assert_eq!(timing.ok().map(|t| t.critical_interval()), Some(ms(70)));
    }
}
