//! Watchdog trait definition.
//!
//! This module provides the `Watchdog` trait every keepalive implementation
//! exposes to the host.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::config::WatchdogConfig;
use crate::error::WatchdogResult;
use crate::logger::WatchdogLogger;
use crate::state::{WatchdogMetrics, WatchdogState};

/// Keepalive contract between the host and a watchdog implementation.
///
/// The host owns the only reference and drives it from a single thread, so
/// every mutating method takes `&mut self` and no implementation needs to
/// lock anything for the host's sake.
///
/// # Call order
///
/// ```text
/// setup ──► enable ──► keep_alive | not_ok (repeated) ──► disable
/// ```
///
/// An error from `setup` means the host must not make further calls.
/// After a successful `setup`, steady-state failures (socket writes, a loop
/// that is not running) are logged through the `WatchdogLogger` and the call
/// still returns `Ok`.
pub trait Watchdog: Send + fmt::Debug {
    /// Short implementation name used in logs.
    fn name(&self) -> &'static str;

    /// Called once when the host loads the watchdog.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required option is missing or
    /// invalid.
    fn setup(
        &mut self,
        config: &WatchdogConfig,
        logger: Arc<dyn WatchdogLogger>,
    ) -> WatchdogResult<()>;

    /// Start (or restart) liveness reporting.
    ///
    /// # Errors
    ///
    /// Implementation-defined; e.g. enabling before `setup`.
    fn enable(&mut self) -> WatchdogResult<()>;

    /// Stop liveness reporting, usually for debugging.
    ///
    /// # Errors
    ///
    /// Returns an error if the watchdog cannot be disabled at all.
    fn disable(&mut self) -> WatchdogResult<()>;

    /// Report that the system is healthy.
    ///
    /// The host calls this at least every [`Self::critical_interval`].
    ///
    /// # Errors
    ///
    /// Implementations log and absorb delivery failures; an error here means
    /// the contract itself was broken.
    fn keep_alive(&mut self) -> WatchdogResult<()>;

    /// Called in lieu of `keep_alive` when host health checks fail.
    ///
    /// Must never count as a keepalive.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the shipped implementations never fail.
    fn not_ok(&mut self) -> WatchdogResult<()>;

    /// Longest period the host may wait between `keep_alive` calls.
    ///
    /// Already includes the implementation's safety buffer.
    fn critical_interval(&self) -> Duration;

    /// Current state snapshot.
    fn state(&self) -> WatchdogState;

    /// Activity counters snapshot.
    fn metrics(&self) -> WatchdogMetrics;

    /// Whether keepalives are currently being reported.
    fn is_ready(&self) -> bool {
        self.state().ready
    }
}

/// Signature of the factory each implementation crate exports.
///
/// Replaces a process-wide plugin instance: the host calls the factory once
/// and keeps the returned box.
pub type WatchdogFactory = fn() -> Box<dyn Watchdog>;
