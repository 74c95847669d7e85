//! wdctl - Maestro watchdog driver
//!
//! Loads one of the shipped watchdog implementations and drives it through
//! the host lifecycle from the command line, for bench testing without the
//! Maestro host.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod config;
mod driver;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use maestro_watchdog::{TracingLogger, WatchdogConfig, WatchdogKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::driver::{DriveOptions, drive, factory_for};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "wdctl")]
#[command(about = "Maestro watchdog driver - set up, enable and feed a watchdog by hand")]
#[command(version)]
struct Cli {
    /// Output in JSON format for machine parsing
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run setup, enable, a keepalive loop, then disable
    Run {
        #[command(flatten)]
        target: TargetArgs,

        /// Number of ticks before disabling (default: run until killed)
        #[arg(long)]
        ticks: Option<u64>,

        /// Call not_ok instead of keep_alive on every K-th tick
        #[arg(long, value_name = "K")]
        not_ok_every: Option<u64>,

        /// Tick period in milliseconds (default: the critical interval)
        #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: Option<u64>,
    },

    /// Print the critical interval the watchdog advertises
    ///
    /// When options or a config file are given the watchdog is set up first,
    /// which for rp100 connects to the socket and sends one keepalive.
    Interval {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Watchdog implementation
    #[arg(long, env = "WDCTL_KIND")]
    kind: WatchdogKind,

    /// First watchdog option (rp100: socket path)
    #[arg(long)]
    opt1: Option<String>,

    /// Second watchdog option (rp100: interval in seconds)
    #[arg(long)]
    opt2: Option<String>,

    /// JSON or YAML file holding opt1/opt2; flags override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl TargetArgs {
    fn has_config(&self) -> bool {
        self.opt1.is_some() || self.opt2.is_some() || self.config.is_some()
    }

    fn resolve_config(&self) -> Result<WatchdogConfig, CliError> {
        let base = match &self.config {
            Some(path) => config::load_config(path)?,
            None => WatchdogConfig::default(),
        };
        let overrides = WatchdogConfig::new(
            self.opt1.clone().unwrap_or_default(),
            self.opt2.clone().unwrap_or_default(),
        );
        Ok(base.merged_with(&overrides))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("wdctl={log_level},maestro_watchdog={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run {
            target,
            ticks,
            not_ok_every,
            tick_ms,
        } => {
            let config = target.resolve_config()?;
            let mut wd = factory_for(target.kind)();
            let opts = DriveOptions {
                ticks: *ticks,
                not_ok_every: *not_ok_every,
                tick: tick_ms.map(Duration::from_millis),
            };
            let logger = Arc::new(TracingLogger::new(target.kind.as_str()));
            let report = drive(wd.as_mut(), &config, logger, opts)?;
            output::print_report(&report, cli.json);
        }
        Commands::Interval { target } => {
            let mut wd = factory_for(target.kind)();
            if target.has_config() {
                let config = target.resolve_config()?;
                wd.setup(&config, Arc::new(TracingLogger::new(target.kind.as_str())))
                    .map_err(CliError::from)?;
            }
            output::print_interval(target.kind, wd.critical_interval(), cli.json);
        }
    }
    Ok(())
}
