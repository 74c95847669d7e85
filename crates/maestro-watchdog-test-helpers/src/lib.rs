//! Shared test utilities for the Maestro watchdog crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Log assertions and polling helpers
//! - [`mock`] - `RecordingLogger`, a `WatchdogLogger` that keeps every message
//! - [`socket`] - `DatagramSink`, a bound Unix datagram socket in a temp dir
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! maestro-watchdog-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use maestro_watchdog_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic, reason = "test-only crate")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod mock;
pub mod must;
pub mod prelude;
pub mod socket;

pub use must::*;
