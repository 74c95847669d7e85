//! Log assertions and polling helpers.

use std::thread;
use std::time::{Duration, Instant};

/// Poll `condition` every few milliseconds until it holds or `timeout` passes.
///
/// Returns whether the condition held. Used to wait for background loops
/// without hard-coding sleeps.
///
/// # Example
///
/// ```rust
/// use maestro_watchdog_test_helpers::assertions::wait_until;
/// use std::time::Duration;
///
/// assert!(wait_until(Duration::from_millis(50), || true));
/// ```
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(2));
    }
}

/// Assert that a `RecordingLogger` saw exactly `n` errors containing a needle.
///
/// # Example
///
/// ```rust
/// use maestro_watchdog::WatchdogLogger;
/// use maestro_watchdog_test_helpers::{assert_errors_logged, mock::RecordingLogger};
///
/// let logger = RecordingLogger::new();
/// logger.error(format_args!("timed out"));
/// assert_errors_logged!(logger, "timed out", 1);
/// ```
#[macro_export]
macro_rules! assert_errors_logged {
    ($logger:expr, $needle:expr, $n:expr $(,)?) => {
        let count = $logger.count_errors_containing($needle);
        if count != $n {
            panic!(
                "expected {} error log(s) containing {:?}, found {}\n  errors: {:#?}",
                $n,
                $needle,
                count,
                $logger.errors()
            );
        }
    };
}
