//! Output formatting for CLI responses

use std::time::Duration;

use anyhow::Error;
use colored::Colorize;
use maestro_watchdog::WatchdogKind;
use serde_json::json;

use crate::driver::RunReport;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": { "message": error.to_string() }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_report(report: &RunReport, json: bool) {
    if json {
        let output = json!({ "success": true, "report": report });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format report as JSON: {e}"),
        }
        return;
    }

    let status = if report.metrics.timeouts == 0 && report.metrics.write_failures == 0 {
        "healthy".green()
    } else {
        "degraded".yellow()
    };
    println!("{} {} ({})", "Watchdog".bold(), report.watchdog.bold(), status);
    println!("  Ticks:             {}", report.ticks);
    println!("  keep_alive calls:  {}", report.keepalive_calls);
    println!("  not_ok calls:      {}", report.not_ok_calls);
    println!("  Tick:              {} ms", report.tick_ms);
    println!("  Critical interval: {} ms", report.critical_interval_ms);
    println!("  Keepalives:        {}", report.metrics.keepalives);
    println!("  Dropped signals:   {}", report.metrics.dropped_signals);
    println!("  Timeouts:          {}", report.metrics.timeouts);
    println!("  Write failures:    {}", report.metrics.write_failures);
}

pub fn print_interval(kind: WatchdogKind, interval: Duration, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "watchdog": kind,
            "critical_interval_ms": u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format interval as JSON: {e}"),
        }
    } else {
        println!("{kind}: {}s", interval.as_secs());
    }
}
