//! # maestro-watchdog-dummy
//!
//! A watchdog with no hardware behind it. Enabling it starts a background
//! loop that expects a keepalive within a fixed interval; when one does not
//! arrive it logs a simulated timeout and keeps polling on a shorter period.
//! Useful for checking that the host calls `keep_alive` on time.
//!
//! ## Loop
//!
//! ```text
//!            keepalive (reset wait to interval)
//!              ┌──────┐
//!              ▼      │
//! enable ──► Running ─┘ ── timeout ──► log, wait = retry_interval
//!              │
//!        stop / disconnect
//!              ▼
//!           Stopped (ready = false)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use maestro_watchdog::prelude::*;
//! use maestro_watchdog_dummy::DummyWatchdog;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let mut wd = DummyWatchdog::new();
//! wd.setup(&WatchdogConfig::default(), Arc::new(TracingLogger::new("dummy")))?;
//! assert_eq!(wd.critical_interval(), Duration::from_secs(10));
//!
//! wd.enable()?;
//! wd.keep_alive()?;
//! wd.disable()?;
//! # Ok::<(), WatchdogError>(())
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]

mod runner;
pub mod timing;
pub mod watchdog;

pub use timing::{DummyTiming, INTERNAL_INTERVAL, RETRY_INTERVAL, SAFETY_BUFFER};
pub use watchdog::DummyWatchdog;

use maestro_watchdog::Watchdog;

/// Factory handed to the host; the returned box is the only instance.
#[must_use]
pub fn new_watchdog() -> Box<dyn Watchdog> {
    Box::new(DummyWatchdog::new())
}
