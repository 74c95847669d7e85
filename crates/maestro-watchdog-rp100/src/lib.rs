//! # maestro-watchdog-rp100
//!
//! Keepalive for the RP100 gateway. A separate device-watchdog process owns
//! the hardware watchdog and listens on a Unix datagram socket; every
//! keepalive sends it one ASCII datagram:
//!
//! ```text
//! up <N>
//! ```
//!
//! where `N` is the reporting interval in seconds. Nothing is ever read back.
//! When the host calls `not_ok` instead, nothing is sent and the device
//! watchdog eventually starves and resets the board.
//!
//! ## Configuration
//!
//! | option | meaning | default |
//! |--------|---------|---------|
//! | `opt1` | path to the device watchdog's datagram socket | required |
//! | `opt2` | interval in seconds, positive integer | 90 |
//!
//! The critical interval advertised to the host is the interval minus a
//! 15 second safety buffer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use maestro_watchdog::prelude::*;
//! use maestro_watchdog_rp100::SocketWatchdog;
//! use std::sync::Arc;
//!
//! let mut wd = SocketWatchdog::new();
//! let config = WatchdogConfig::new("/var/run/devicewd.sock", "60");
//! wd.setup(&config, Arc::new(TracingLogger::new("rp100")))?;
//! wd.keep_alive()?;
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

pub mod link;
pub mod options;
pub mod watchdog;

pub use link::{Dialer, KeepaliveLink, dial_unix};
pub use options::{DEFAULT_INTERVAL_SECS, IntervalOption, SAFETY_BUFFER_SECS, up_message};
pub use watchdog::SocketWatchdog;

use maestro_watchdog::Watchdog;

/// Factory handed to the host; the returned box is the only instance.
#[must_use]
pub fn new_watchdog() -> Box<dyn Watchdog> {
    Box::new(SocketWatchdog::new())
}
