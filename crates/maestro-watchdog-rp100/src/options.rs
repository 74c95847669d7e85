//! Interpretation of the rp100 config options.

use std::num::ParseIntError;

/// Interval used when `opt2` is absent or unusable.
pub const DEFAULT_INTERVAL_SECS: u64 = 90;

/// Subtracted from the interval for the advertised critical interval.
pub const SAFETY_BUFFER_SECS: u64 = 15;

/// What `opt2` turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalOption {
    /// `opt2` was empty.
    Unset,
    /// A positive number of seconds.
    Valid(u64),
    /// Not a base-10 integer.
    Unparseable(ParseIntError),
    /// An integer below 1.
    OutOfRange(i64),
}

impl IntervalOption {
    /// Classify a raw `opt2` value. No trimming is applied.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Unset;
        }
        match raw.parse::<i64>() {
            Err(e) => Self::Unparseable(e),
            Ok(v) => match u64::try_from(v) {
                Ok(secs) if secs >= 1 => Self::Valid(secs),
                _ => Self::OutOfRange(v),
            },
        }
    }

    /// Interval to use, falling back to [`DEFAULT_INTERVAL_SECS`].
    #[must_use]
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Valid(secs) => *secs,
            _ => DEFAULT_INTERVAL_SECS,
        }
    }

    /// Whether the value was present but unusable.
    #[must_use]
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::Unparseable(_) | Self::OutOfRange(_))
    }
}

/// The keepalive datagram for `interval_secs`.
#[must_use]
pub fn up_message(interval_secs: u64) -> String {
    format!("up {interval_secs}")
}
