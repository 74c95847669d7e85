//! Host-facing side of the dummy watchdog.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use maestro_watchdog::{
    MetricsCounters, TracingLogger, Watchdog, WatchdogConfig, WatchdogError, WatchdogLogger,
    WatchdogMetrics, WatchdogResult, WatchdogState,
};

use crate::runner::{Control, Runner, SignalReceivers, SignalSenders, signal_channels};
use crate::timing::DummyTiming;

const NAME: &str = "dummy";

/// Watchdog backed by an in-process timer loop.
///
/// The host-facing methods never block: keepalive and stop each go through
/// their own single-slot channel with `try_send`, and a signal the loop
/// cannot take is logged and dropped. Each `enable` gets fresh channels, so a
/// signal left over from a previous run can never reach a new loop.
#[derive(Debug)]
pub struct DummyWatchdog {
    timing: DummyTiming,
    log: Arc<dyn WatchdogLogger>,
    configured: bool,
    signals: Option<SignalSenders>,
    /// Receivers created by `setup`, consumed by the first `enable`.
    pending: Option<SignalReceivers>,
    ready: Arc<AtomicBool>,
    counters: Arc<MetricsCounters>,
    runner: Option<JoinHandle<()>>,
}

impl DummyWatchdog {
    /// Create a dummy watchdog with the production timing (15 s / 5 s / 2 s).
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(DummyTiming::default())
    }

    /// Create a dummy watchdog with custom timing.
    #[must_use]
    pub fn with_timing(timing: DummyTiming) -> Self {
        Self {
            timing,
            log: Arc::new(TracingLogger::new(NAME)),
            configured: false,
            signals: None,
            pending: None,
            ready: Arc::new(AtomicBool::new(false)),
            counters: Arc::new(MetricsCounters::new()),
            runner: None,
        }
    }

    /// Timing in use.
    #[must_use]
    pub fn timing(&self) -> DummyTiming {
        self.timing
    }

    /// Whether the background loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Try to hand a signal to the running loop without blocking.
    fn try_signal(&self, control: Control) -> bool {
        if !self.is_running() {
            return false;
        }
        self.signals
            .as_ref()
            .is_some_and(|tx| tx.try_send(control))
    }

    /// Join a loop thread that has already finished.
    fn reap_runner(&mut self) {
        let Some(handle) = self.runner.take() else {
            return;
        };
        if handle.join().is_err() {
            self.log
                .error(format_args!("dummy watchdog: previous loop panicked"));
        }
    }

    fn spawn_runner(&mut self) -> WatchdogResult<()> {
        let signals = match self.pending.take() {
            Some(rx) => rx,
            None => {
                let (tx, rx) = signal_channels();
                self.signals = Some(tx);
                rx
            }
        };
        let runner = Runner {
            signals,
            timing: self.timing,
            ready: Arc::clone(&self.ready),
            counters: Arc::clone(&self.counters),
            log: Arc::clone(&self.log),
        };
        let handle = thread::Builder::new()
            .name("dummy-watchdog".into())
            .spawn(move || runner.run())?;
        self.runner = Some(handle);
        Ok(())
    }
}

impl Default for DummyWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchdog for DummyWatchdog {
    fn name(&self) -> &'static str {
        NAME
    }

    fn setup(
        &mut self,
        config: &WatchdogConfig,
        logger: Arc<dyn WatchdogLogger>,
    ) -> WatchdogResult<()> {
        self.log = logger;
        self.log.debug(format_args!(
            "dummy watchdog: setup with config {config:?}"
        ));
        let (tx, rx) = signal_channels();
        self.signals = Some(tx);
        self.pending = Some(rx);
        self.configured = true;
        Ok(())
    }

    fn enable(&mut self) -> WatchdogResult<()> {
        if !self.configured {
            return Err(WatchdogError::NotSetUp);
        }
        self.log.debug(format_args!("dummy watchdog: enable() called"));

        if self
            .ready
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.log.error(format_args!(
                "dummy watchdog: enabled twice, loop is already running"
            ));
            return Ok(());
        }

        self.reap_runner();
        if let Err(e) = self.spawn_runner() {
            self.ready.store(false, Ordering::Release);
            self.log
                .error(format_args!("dummy watchdog: could not start loop: {e}"));
            return Err(e);
        }
        Ok(())
    }

    fn disable(&mut self) -> WatchdogResult<()> {
        if !self.is_running() {
            return Ok(());
        }
        if self.try_signal(Control::Stop) {
            self.log.debug(format_args!("dummy watchdog: disable() called"));
        } else {
            self.counters.record_dropped_signal();
            self.log.error(format_args!(
                "dummy watchdog: disable() would block, loop not running?"
            ));
        }
        Ok(())
    }

    fn keep_alive(&mut self) -> WatchdogResult<()> {
        if self.try_signal(Control::KeepAlive) {
            self.counters.record_keepalive();
            self.log.debug(format_args!("dummy watchdog: keep_alive() called"));
        } else {
            self.counters.record_dropped_signal();
            self.log.error(format_args!(
                "dummy watchdog: keep_alive() would block, loop not running?"
            ));
        }
        Ok(())
    }

    fn not_ok(&mut self) -> WatchdogResult<()> {
        self.counters.record_not_ok();
        self.log.error(format_args!("dummy watchdog: not OK"));
        Ok(())
    }

    fn critical_interval(&self) -> Duration {
        self.timing.critical_interval()
    }

    fn state(&self) -> WatchdogState {
        WatchdogState {
            ready: self.is_running(),
            interval: self.timing.interval,
        }
    }

    fn metrics(&self) -> WatchdogMetrics {
        self.counters.snapshot()
    }
}

impl Drop for DummyWatchdog {
    fn drop(&mut self) {
        // Dropping the senders disconnects both channels and wakes the loop.
        self.signals = None;
        self.pending = None;
        self.reap_runner();
    }
}
