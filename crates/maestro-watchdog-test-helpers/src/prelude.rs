//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use maestro_watchdog_test_helpers::prelude::*;
//! ```

pub use crate::assert_errors_logged;
pub use crate::assertions::wait_until;
pub use crate::mock::{LogLevel, LogRecord, RecordingLogger};
pub use crate::must::{must, must_some, must_with};
pub use crate::socket::DatagramSink;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
