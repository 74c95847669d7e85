//! Leveled logger collaborator supplied by the host.

use std::fmt;

/// Logger handed to a watchdog during `setup`.
///
/// The host only promises two levels. Messages arrive pre-formatted as
/// [`fmt::Arguments`], so call sites read like the host's printf-style API:
///
/// ```rust
/// use maestro_watchdog::{TracingLogger, WatchdogLogger};
///
/// let log = TracingLogger::new("dummy");
/// let interval = 15;
/// log.debug(format_args!("waiting {interval}s for a keepalive"));
/// ```
///
/// Implementations are shared with background threads, hence `Send + Sync`.
pub trait WatchdogLogger: Send + Sync + fmt::Debug {
    /// Log a debug-level message.
    fn debug(&self, args: fmt::Arguments<'_>);

    /// Log an error-level message.
    fn error(&self, args: fmt::Arguments<'_>);
}

/// `WatchdogLogger` that forwards to `tracing`.
///
/// Every event carries a `watchdog` field naming the implementation. This is
/// the logger an instance uses until the host supplies its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger {
    name: &'static str,
}

impl TracingLogger {
    /// Create a logger tagging events with `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Name attached to every event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl WatchdogLogger for TracingLogger {
    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(watchdog = self.name, "{args}");
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(watchdog = self.name, "{args}");
    }
}
