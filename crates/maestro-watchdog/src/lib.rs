//! # maestro-watchdog
//!
//! Watchdog plugin contract for the Maestro device-management daemon.
//!
//! The host loads one watchdog implementation, calls [`Watchdog::setup`] once,
//! then [`Watchdog::enable`], and from then on calls [`Watchdog::keep_alive`]
//! at least as often as [`Watchdog::critical_interval`] says. When its own
//! health checks fail it calls [`Watchdog::not_ok`] instead, which lets the
//! underlying watchdog starve.
//!
//! This crate only holds the contract and the pieces shared by every
//! implementation:
//!
//! - [`watchdog`] - the `Watchdog` trait and the factory signature
//! - [`config`] - host-supplied `WatchdogConfig`
//! - [`logger`] - the leveled `WatchdogLogger` collaborator and a `tracing` adapter
//! - [`state`] - `WatchdogState` and `WatchdogMetrics` snapshots
//! - [`kind`] - names of the shipped implementations
//! - [`error`] - `WatchdogError`
//!
//! ## Lifecycle
//!
//! ```text
//! setup() ──► enable() ──► keep_alive() / not_ok() ... ──► disable()
//!                ▲                                           │
//!                └───────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use maestro_watchdog::prelude::*;
//!
//! let config = WatchdogConfig::builder()
//!     .opt1("/var/run/devicedb-wd.sock")
//!     .opt2("60")
//!     .build();
//! assert_eq!(config.opt1(), Some("/var/run/devicedb-wd.sock"));
//! assert_eq!("rp100".parse::<WatchdogKind>().ok(), Some(WatchdogKind::Rp100));
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
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod kind;
pub mod logger;
pub mod prelude;
pub mod state;
pub mod watchdog;

pub use config::{WatchdogConfig, WatchdogConfigBuilder};
pub use error::{WatchdogError, WatchdogResult};
pub use kind::WatchdogKind;
pub use logger::{TracingLogger, WatchdogLogger};
pub use state::{MetricsCounters, WatchdogMetrics, WatchdogState};
pub use watchdog::{Watchdog, WatchdogFactory};
