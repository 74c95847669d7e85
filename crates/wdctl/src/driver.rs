//! Drives a watchdog through its lifecycle the way the host does.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use maestro_watchdog::{
    Watchdog, WatchdogConfig, WatchdogFactory, WatchdogKind, WatchdogLogger, WatchdogMetrics,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::CliError;

/// Tick used when neither the caller nor the watchdog gives a non-zero one.
const MIN_TICK: Duration = Duration::from_secs(1);

/// Factory for each shipped implementation.
pub fn factory_for(kind: WatchdogKind) -> WatchdogFactory {
    match kind {
        WatchdogKind::Dummy => maestro_watchdog_dummy::new_watchdog,
        WatchdogKind::Rp100 => maestro_watchdog_rp100::new_watchdog,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveOptions {
    /// Ticks to run; `None` runs until the process is killed.
    pub ticks: Option<u64>,
    /// Report `not_ok` instead of a keepalive on every K-th tick.
    pub not_ok_every: Option<u64>,
    /// Tick period; `None` or zero falls back to the critical interval.
    pub tick: Option<Duration>,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub watchdog: &'static str,
    pub ready_after_setup: bool,
    pub ticks: u64,
    pub keepalive_calls: u64,
    pub not_ok_calls: u64,
    pub tick_ms: u64,
    pub critical_interval_ms: u64,
    pub metrics: WatchdogMetrics,
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Whether tick number `tick` (1-based) should report `not_ok`.
fn is_not_ok_tick(tick: u64, every: Option<u64>) -> bool {
    every.is_some_and(|k| k > 0 && tick % k == 0)
}

/// Run `setup`, `enable`, the tick loop, then `disable`.
pub fn drive(
    wd: &mut dyn Watchdog,
    config: &WatchdogConfig,
    logger: Arc<dyn WatchdogLogger>,
    opts: DriveOptions,
) -> Result<RunReport, CliError> {
    wd.setup(config, logger)?;
    let ready_after_setup = wd.is_ready();
    wd.enable()?;
    if !wd.is_ready() {
        warn!(watchdog = wd.name(), "not ready after enable, keepalives will be skipped");
    }

    let critical = wd.critical_interval();
    let tick = opts
        .tick
        .filter(|t| !t.is_zero())
        .unwrap_or(if critical.is_zero() { MIN_TICK } else { critical });
    info!(
        watchdog = wd.name(),
        tick_ms = millis(tick),
        critical_ms = millis(critical),
        "driving watchdog"
    );

    let mut report = RunReport {
        watchdog: wd.name(),
        ready_after_setup,
        ticks: 0,
        keepalive_calls: 0,
        not_ok_calls: 0,
        tick_ms: millis(tick),
        critical_interval_ms: millis(critical),
        metrics: WatchdogMetrics::default(),
    };

    while opts.ticks.is_none_or(|limit| report.ticks < limit) {
        thread::sleep(tick);
        report.ticks += 1;
        if is_not_ok_tick(report.ticks, opts.not_ok_every) {
            wd.not_ok()?;
            report.not_ok_calls += 1;
        } else {
            wd.keep_alive()?;
            report.keepalive_calls += 1;
        }
    }

    wd.disable()?;
    report.metrics = wd.metrics();
    Ok(report)
}
