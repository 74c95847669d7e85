//! Integration tests for the wdctl binary.

use assert_cmd::Command;
use maestro_watchdog_test_helpers::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

fn wdctl() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("wdctl")?)
}

#[test]
fn test_cli_help() -> TestResult {
    wdctl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watchdog"));
    Ok(())
}

#[test]
fn test_dummy_interval() -> TestResult {
    wdctl()?
        .args(["interval", "--kind", "dummy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dummy: 10s"));
    Ok(())
}

#[test]
fn test_rp100_default_interval() -> TestResult {
    wdctl()?
        .args(["interval", "--kind", "rp100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rp100: 75s"));
    Ok(())
}

#[test]
fn test_interval_json() -> TestResult {
    let output = wdctl()?
        .args(["interval", "--kind", "dummy", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    insta::assert_json_snapshot!(value, @r#"
    {
      "critical_interval_ms": 10000,
      "success": true,
      "watchdog": "dummy"
    }
    "#);
    Ok(())
}

#[test]
fn test_unknown_kind_is_usage_error() -> TestResult {
    wdctl()?
        .args(["run", "--kind", "rp200"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown watchdog kind"));
    Ok(())
}

#[test]
fn test_rp100_without_socket_path_exits_2() -> TestResult {
    wdctl()?
        .args(["run", "--kind", "rp100", "--ticks", "1", "--tick-ms", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing required option 'opt1'"));
    Ok(())
}

#[test]
fn test_missing_config_file_exits_2() -> TestResult {
    wdctl()?
        .args(["run", "--kind", "dummy", "--config", "/does/not/exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot read config file"));
    Ok(())
}

#[test]
fn test_rp100_run_delivers_keepalives() -> TestResult {
    let sink = DatagramSink::bind()?;

    wdctl()?
        .args(["run", "--kind", "rp100", "--opt1"])
        .arg(sink.path())
        .args(["--opt2", "20", "--ticks", "2", "--tick-ms", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keepalives:        3"));

    assert_eq!(sink.drain()?, vec!["up 20", "up 20", "up 20"]);
    Ok(())
}

#[test]
fn test_rp100_run_from_yaml_config() -> TestResult {
    let sink = DatagramSink::bind()?;
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("wd.yaml");
    std::fs::write(
        &config,
        format!("Opt1: {}\nOpt2: \"45\"\n", sink.path_str()),
    )?;

    let output = wdctl()?
        .args(["run", "--kind", "rp100", "--ticks", "3", "--tick-ms", "5"])
        .args(["--not-ok-every", "3", "--json", "--config"])
        .arg(&config)
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["report"]["keepalive_calls"], 2);
    assert_eq!(value["report"]["not_ok_calls"], 1);
    assert_eq!(value["report"]["critical_interval_ms"], 30_000);
    assert_eq!(sink.drain()?.len(), 3);
    Ok(())
}

#[test]
fn test_dummy_run_json_report() -> TestResult {
    let output = wdctl()?
        .args(["run", "--kind", "dummy", "--ticks", "3", "--tick-ms", "5", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["success"], true);
    assert_eq!(value["report"]["watchdog"], "dummy");
    assert_eq!(value["report"]["metrics"]["keepalives"], 3);
    assert_eq!(value["report"]["metrics"]["timeouts"], 0);
    Ok(())
}
