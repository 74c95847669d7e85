//! Background keepalive loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossbeam::channel::{Receiver, Sender, bounded};
use crossbeam::select;
use maestro_watchdog::{MetricsCounters, WatchdogLogger};

use crate::timing::DummyTiming;

/// Signals sent from the host-facing side to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Stop,
    KeepAlive,
}

/// Host-facing ends of the two single-slot signal channels.
///
/// Stop has its own slot so a keepalive the loop has not picked up yet can
/// never crowd it out.
#[derive(Debug)]
pub(crate) struct SignalSenders {
    keepalive: Sender<()>,
    stop: Sender<()>,
}

impl SignalSenders {
    /// Queue `control` without blocking; `false` when its slot is taken.
    pub(crate) fn try_send(&self, control: Control) -> bool {
        let tx = match control {
            Control::KeepAlive => &self.keepalive,
            Control::Stop => &self.stop,
        };
        tx.try_send(()).is_ok()
    }
}

/// Loop-side ends of the signal channels.
#[derive(Debug)]
pub(crate) struct SignalReceivers {
    keepalive: Receiver<()>,
    stop: Receiver<()>,
}

pub(crate) fn signal_channels() -> (SignalSenders, SignalReceivers) {
    let (keepalive_tx, keepalive_rx) = bounded(1);
    let (stop_tx, stop_rx) = bounded(1);
    (
        SignalSenders {
            keepalive: keepalive_tx,
            stop: stop_tx,
        },
        SignalReceivers {
            keepalive: keepalive_rx,
            stop: stop_rx,
        },
    )
}

enum Event {
    KeepAlive,
    Stop,
    Timeout,
}

/// State owned by one run of the loop.
#[derive(Debug)]
pub(crate) struct Runner {
    pub(crate) signals: SignalReceivers,
    pub(crate) timing: DummyTiming,
    pub(crate) ready: Arc<AtomicBool>,
    pub(crate) counters: Arc<MetricsCounters>,
    pub(crate) log: Arc<dyn WatchdogLogger>,
}

impl Runner {
    fn next_event(&self, wait: std::time::Duration) -> Event {
        select! {
            recv(self.signals.stop) -> _ => Event::Stop,
            recv(self.signals.keepalive) -> msg => match msg {
                Ok(()) => Event::KeepAlive,
                Err(_) => Event::Stop,
            },
            default(wait) => Event::Timeout,
        }
    }

    /// Run until a stop signal arrives or the senders go away.
    ///
    /// `ready` is cleared only on the way out, after the last receive.
    pub(crate) fn run(self) {
        let mut wait = self.timing.interval;
        loop {
            self.log
                .debug(format_args!("dummy watchdog: waiting {wait:?} for a signal"));
            match self.next_event(wait) {
                Event::KeepAlive => wait = self.timing.interval,
                Event::Stop => break,
                Event::Timeout => {
                    self.counters.record_timeout();
                    self.log.error(format_args!(
                        "dummy watchdog: WATCHDOG TIMED OUT, no keepalive within {wait:?}"
                    ));
                    wait = self.timing.retry_interval;
                }
            }
        }
        self.log.debug(format_args!("dummy watchdog: stopped"));
        self.ready.store(false, Ordering::Release);
    }
}
