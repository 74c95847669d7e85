//! Prelude for maestro-watchdog.
//!
//! This module re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use maestro_watchdog::prelude::*;
//!
//! let config = WatchdogConfig::new("/var/run/wd.sock", "");
//! assert_eq!(config.opt2(), None);
//! ```

pub use crate::config::{WatchdogConfig, WatchdogConfigBuilder};
pub use crate::error::{WatchdogError, WatchdogResult};
pub use crate::kind::WatchdogKind;
pub use crate::logger::{TracingLogger, WatchdogLogger};
pub use crate::state::{MetricsCounters, WatchdogMetrics, WatchdogState};
pub use crate::watchdog::{Watchdog, WatchdogFactory};
