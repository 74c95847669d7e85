//! Host-supplied watchdog configuration.

use serde::{Deserialize, Serialize};

/// Configuration handed to [`Watchdog::setup`](crate::Watchdog::setup).
///
/// Both options are free-form strings and their meaning belongs to the
/// implementation. The rp100 watchdog reads `opt1` as the path of the
/// device watchdog's datagram socket and `opt2` as the reporting interval in
/// seconds. The dummy watchdog ignores both.
///
/// Missing fields deserialize as empty strings. The capitalised `Opt1` and
/// `Opt2` spellings used by Maestro's own config files are accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// First implementation-defined option.
    #[serde(alias = "Opt1")]
    pub opt1: String,

    /// Second implementation-defined option.
    #[serde(alias = "Opt2")]
    pub opt2: String,
}

impl WatchdogConfig {
    /// Create a configuration from both options.
    #[must_use]
    pub fn new(opt1: impl Into<String>, opt2: impl Into<String>) -> Self {
        Self {
            opt1: opt1.into(),
            opt2: opt2.into(),
        }
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> WatchdogConfigBuilder {
        WatchdogConfigBuilder::default()
    }

    /// `opt1`, or `None` when it was left empty.
    #[must_use]
    pub fn opt1(&self) -> Option<&str> {
        non_empty(&self.opt1)
    }

    /// `opt2`, or `None` when it was left empty.
    #[must_use]
    pub fn opt2(&self) -> Option<&str> {
        non_empty(&self.opt2)
    }

    /// Overlay the non-empty options of `other` onto `self`.
    ///
    /// Used when command-line options override a config file.
    #[must_use]
    pub fn merged_with(mut self, other: &WatchdogConfig) -> Self {
        if let Some(opt1) = other.opt1() {
            self.opt1 = opt1.to_owned();
        }
        if let Some(opt2) = other.opt2() {
            self.opt2 = opt2.to_owned();
        }
        self
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Builder for `WatchdogConfig`.
#[derive(Debug, Default)]
pub struct WatchdogConfigBuilder {
    config: WatchdogConfig,
}

impl WatchdogConfigBuilder {
    /// Set `opt1`.
    #[must_use]
    pub fn opt1(mut self, value: impl Into<String>) -> Self {
        self.config.opt1 = value.into();
        self
    }

    /// Set `opt2`.
    #[must_use]
    pub fn opt2(mut self, value: impl Into<String>) -> Self {
        self.config.opt2 = value.into();
        self
    }

    /// Build the configuration.
    ///
    /// Nothing is validated here; each implementation checks the options it
    /// cares about during `setup`.
    #[must_use]
    pub fn build(self) -> WatchdogConfig {
        self.config
    }
}
