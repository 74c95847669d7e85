//! Property tests for rp100 interval handling.

use std::time::Duration;

use maestro_watchdog_rp100::{
    DEFAULT_INTERVAL_SECS, IntervalOption, SAFETY_BUFFER_SECS, SocketWatchdog, up_message,
};
use maestro_watchdog::prelude::*;
use maestro_watchdog_test_helpers::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_positive_interval_is_kept(secs in 1i64..=i64::MAX) {
        let parsed = IntervalOption::parse(&secs.to_string());
        prop_assert_eq!(parsed.seconds(), secs.unsigned_abs());
        prop_assert!(!parsed.is_anomaly());
    }

    #[test]
    fn prop_non_positive_interval_uses_default(secs in i64::MIN..=0i64) {
        let parsed = IntervalOption::parse(&secs.to_string());
        prop_assert_eq!(parsed, IntervalOption::OutOfRange(secs));
        prop_assert_eq!(IntervalOption::parse(&secs.to_string()).seconds(), DEFAULT_INTERVAL_SECS);
    }

    #[test]
    fn prop_non_numeric_interval_uses_default(raw in "[a-zA-Z ]{1,12}") {
        let parsed = IntervalOption::parse(&raw);
        prop_assert!(parsed.is_anomaly());
        prop_assert_eq!(parsed.seconds(), DEFAULT_INTERVAL_SECS);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_wire_message_and_critical_interval(secs in 1u64..100_000) {
        let sink = must(DatagramSink::bind());
        let mut wd = SocketWatchdog::new();
        let config = WatchdogConfig::new(sink.path_str(), secs.to_string());

        prop_assert!(wd.setup(&config, RecordingLogger::new().shared()).is_ok());

        prop_assert_eq!(must(sink.recv_message()), up_message(secs));
        prop_assert_eq!(
            wd.critical_interval(),
            Duration::from_secs(secs.saturating_sub(SAFETY_BUFFER_SECS))
        );
    }
}
