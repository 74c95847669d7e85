//! The rp100 watchdog implementation.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use maestro_watchdog::{
    MetricsCounters, TracingLogger, Watchdog, WatchdogConfig, WatchdogError, WatchdogLogger,
    WatchdogMetrics, WatchdogResult, WatchdogState,
};

use crate::link::{Dialer, KeepaliveLink, dial_unix};
use crate::options::{DEFAULT_INTERVAL_SECS, IntervalOption, SAFETY_BUFFER_SECS, up_message};

const NAME: &str = "rp100";

/// Watchdog that keeps the RP100 device watchdog fed over a datagram socket.
///
/// All sends happen synchronously on the caller's thread. Steady-state
/// failures are logged and counted; only a missing socket path fails
/// `setup`.
///
/// `enable` and `disable` only toggle whether keepalives are sent. They do
/// not arm or disarm the device watchdog itself, so after `disable` the
/// device keeps counting and will reset the board unless `enable` follows in
/// time.
// TODO: send an explicit "down"/"up" control datagram from enable/disable
// once the device watchdog process accepts one.
pub struct SocketWatchdog {
    log: Arc<dyn WatchdogLogger>,
    dialer: Dialer,
    link: Option<Box<dyn KeepaliveLink>>,
    interval_secs: u64,
    message: String,
    ready: bool,
    counters: MetricsCounters,
}

impl SocketWatchdog {
    /// Create an rp100 watchdog that dials real Unix datagram sockets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dialer(Box::new(dial_unix))
    }

    /// Create an rp100 watchdog with a custom link dialer.
    #[must_use]
    pub fn with_dialer(dialer: Dialer) -> Self {
        Self {
            log: Arc::new(TracingLogger::new(NAME)),
            dialer,
            link: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
            message: up_message(DEFAULT_INTERVAL_SECS),
            ready: false,
            counters: MetricsCounters::new(),
        }
    }

    /// Configured reporting interval in seconds.
    #[must_use]
    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// The datagram sent on every keepalive.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn write_keepalive(&mut self) {
        let Some(link) = self.link.as_mut() else {
            return;
        };
        let expected = self.message.len();
        match link.send_datagram(self.message.as_bytes()) {
            Ok(n) if n == expected => {
                self.counters.record_keepalive();
                self.log
                    .debug(format_args!("rp100 watchdog: sent '{}'", self.message));
            }
            Ok(n) => {
                self.counters.record_write_failure();
                self.log.error(format_args!(
                    "rp100 watchdog: short write, {n} of {expected} bytes"
                ));
            }
            Err(e) => {
                self.counters.record_write_failure();
                self.log
                    .error(format_args!("rp100 watchdog: write failed: {e}"));
            }
        }
    }
}

impl Default for SocketWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SocketWatchdog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SocketWatchdog")
            .field("link", &self.link)
            .field("interval_secs", &self.interval_secs)
            .field("message", &self.message)
            .field("ready", &self.ready)
            .finish_non_exhaustive()
    }
}

impl Watchdog for SocketWatchdog {
    fn name(&self) -> &'static str {
        NAME
    }

    fn setup(
        &mut self,
        config: &WatchdogConfig,
        logger: Arc<dyn WatchdogLogger>,
    ) -> WatchdogResult<()> {
        self.log = logger;
        self.ready = false;
        self.link = None;
        self.interval_secs = DEFAULT_INTERVAL_SECS;
        self.message = up_message(DEFAULT_INTERVAL_SECS);

        let Some(path) = config.opt1() else {
            self.log
                .error(format_args!("rp100 watchdog: opt1 (socket path) is required"));
            return Err(WatchdogError::MissingOption("opt1"));
        };

        let interval = IntervalOption::parse(&config.opt2);
        match &interval {
            IntervalOption::Unparseable(e) => self.log.error(format_args!(
                "rp100 watchdog: could not parse opt2 '{}': {e}, using {DEFAULT_INTERVAL_SECS}s",
                config.opt2
            )),
            IntervalOption::OutOfRange(v) => self.log.error(format_args!(
                "rp100 watchdog: opt2 {v} out of range, using {DEFAULT_INTERVAL_SECS}s"
            )),
            IntervalOption::Unset | IntervalOption::Valid(_) => {}
        }
        self.interval_secs = interval.seconds();
        self.message = up_message(self.interval_secs);

        match (self.dialer)(Path::new(path)) {
            Ok(link) => self.link = Some(link),
            Err(e) => {
                self.log.error(format_args!(
                    "rp100 watchdog: could not connect to {path}: {e}"
                ));
                return Ok(());
            }
        }

        self.ready = true;
        self.log.debug(format_args!(
            "rp100 watchdog: connected to {path}, interval {}s",
            self.interval_secs
        ));
        self.write_keepalive();
        Ok(())
    }

    fn enable(&mut self) -> WatchdogResult<()> {
        self.ready = self.link.is_some();
        self.log
            .debug(format_args!("rp100 watchdog: enable(), ready={}", self.ready));
        Ok(())
    }

    fn disable(&mut self) -> WatchdogResult<()> {
        self.ready = false;
        self.log.debug(format_args!("rp100 watchdog: disable()"));
        Ok(())
    }

    fn keep_alive(&mut self) -> WatchdogResult<()> {
        if self.ready {
            self.write_keepalive();
        }
        Ok(())
    }

    fn not_ok(&mut self) -> WatchdogResult<()> {
        self.counters.record_not_ok();
        self.log
            .error(format_args!("rp100 watchdog: Skipping write. Not OK."));
        Ok(())
    }

    fn critical_interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.saturating_sub(SAFETY_BUFFER_SECS))
    }

    fn state(&self) -> WatchdogState {
        WatchdogState {
            ready: self.ready,
            interval: Duration::from_secs(self.interval_secs),
        }
    }

    fn metrics(&self) -> WatchdogMetrics {
        self.counters.snapshot()
    }
}
