//! Lifecycle tests for the dummy watchdog loop.

use std::thread;
use std::time::{Duration, Instant};

use maestro_watchdog::prelude::*;
use maestro_watchdog_dummy::{DummyTiming, DummyWatchdog, new_watchdog};
use maestro_watchdog_test_helpers::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn started(timing: DummyTiming) -> Result<(DummyWatchdog, RecordingLogger), WatchdogError> {
    let logger = RecordingLogger::new();
    let mut wd = DummyWatchdog::with_timing(timing);
    wd.setup(&WatchdogConfig::default(), logger.shared())?;
    wd.enable()?;
    Ok((wd, logger))
}

#[test]
fn test_factory_returns_dummy() {
    let wd = new_watchdog();
    assert_eq!(wd.name(), "dummy");
    assert_eq!(wd.critical_interval(), Duration::from_secs(10));
    assert!(!wd.is_ready());
}

#[test]
fn test_regular_keepalives_never_time_out() -> TestResult {
    let timing = DummyTiming::new(ms(200), ms(50), ms(100))?;
    let (mut wd, logger) = started(timing)?;

    let period = wd.critical_interval() / 3;
    let until = Instant::now() + ms(700);
    while Instant::now() < until {
        wd.keep_alive()?;
        thread::sleep(period);
    }

    assert_eq!(wd.metrics().timeouts, 0);
    assert_errors_logged!(logger, "TIMED OUT", 0);
    assert!(wd.is_running());
    wd.disable()?;
    Ok(())
}

#[test]
fn test_single_gap_logs_exactly_one_timeout() -> TestResult {
    let timing = DummyTiming::new(ms(300), ms(50), ms(1_000))?;
    let (mut wd, logger) = started(timing)?;

    wd.keep_alive()?;
    assert!(wait_until(ms(2_000), || wd.metrics().timeouts == 1));
    // Now on the shortened wait; a keepalive puts it back on the full interval.
    wd.keep_alive()?;

    assert_eq!(wd.metrics().timeouts, 1);
    assert_errors_logged!(logger, "TIMED OUT", 1);
    assert!(wd.is_running());

    wd.disable()?;
    assert!(wait_until(ms(2_000), || !wd.is_running()));
    Ok(())
}

#[test]
fn test_disable_right_after_keep_alive_stops_loop() -> TestResult {
    for _ in 0..20 {
        let timing = DummyTiming::new(ms(500), ms(100), ms(100))?;
        let (mut wd, logger) = started(timing)?;
        thread::sleep(ms(2));

        wd.keep_alive()?;
        wd.disable()?;

        assert!(wait_until(ms(1_000), || !wd.is_running()));
        assert_errors_logged!(logger, "would block", 0);
    }
    Ok(())
}

#[test]
fn test_loop_keeps_reporting_after_timeout() -> TestResult {
    let timing = DummyTiming::new(ms(50), ms(10), ms(30))?;
    let (mut wd, logger) = started(timing)?;

    assert!(wait_until(ms(2_000), || wd.metrics().timeouts >= 3));
    assert!(logger.count_errors_containing("TIMED OUT") >= 3);
    assert!(wd.is_running());

    wd.disable()?;
    assert!(wait_until(ms(2_000), || !wd.is_running()));
    Ok(())
}

#[test]
fn test_enable_twice_starts_one_loop() -> TestResult {
    let timing = DummyTiming::new(ms(500), ms(100), ms(100))?;
    let (mut wd, logger) = started(timing)?;

    wd.enable()?;

    assert_errors_logged!(logger, "enabled twice", 1);
    assert!(wd.is_running());

    // One stop is enough, so there was only one loop.
    wd.disable()?;
    assert!(wait_until(ms(2_000), || !wd.is_running()));
    assert_eq!(
        logger
            .debugs()
            .iter()
            .filter(|m| m.contains("stopped"))
            .count(),
        1
    );
    Ok(())
}

#[test]
fn test_calls_after_disable_do_not_block() -> TestResult {
    let timing = DummyTiming::new(ms(500), ms(100), ms(100))?;
    let (mut wd, logger) = started(timing)?;

    wd.disable()?;
    assert!(wait_until(ms(2_000), || !wd.is_running()));
    logger.clear();

    let start = Instant::now();
    wd.keep_alive()?;
    wd.disable()?;
    assert!(start.elapsed() < ms(100));

    assert!(!wd.is_running());
    assert_errors_logged!(logger, "keep_alive() would block", 1);
    assert_errors_logged!(logger, "disable()", 0);
    Ok(())
}

#[test]
fn test_not_ok_does_not_reset_timer() -> TestResult {
    let timing = DummyTiming::new(ms(100), ms(20), ms(1_000))?;
    let (mut wd, logger) = started(timing)?;

    let until = Instant::now() + ms(300);
    while Instant::now() < until {
        wd.not_ok()?;
        thread::sleep(ms(20));
    }

    assert_eq!(wd.metrics().timeouts, 1);
    assert_errors_logged!(logger, "TIMED OUT", 1);
    assert!(wd.metrics().not_ok >= 5);
    assert_eq!(wd.metrics().keepalives, 0);
    wd.disable()?;
    Ok(())
}

#[test]
fn test_reenable_after_disable() -> TestResult {
    let timing = DummyTiming::new(ms(500), ms(100), ms(100))?;
    let (mut wd, logger) = started(timing)?;

    wd.disable()?;
    assert!(wait_until(ms(2_000), || !wd.is_running()));

    wd.enable()?;
    assert!(wd.is_running());
    wd.keep_alive()?;
    assert_eq!(wd.metrics().keepalives, 1);
    assert_errors_logged!(logger, "enabled twice", 0);
    Ok(())
}
