//! Error types for wdctl

use std::path::PathBuf;

use maestro_watchdog::WatchdogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Watchdog(#[from] WatchdogError),

    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config format for {0}, expected .json, .yaml or .yml")]
    UnsupportedConfigFormat(PathBuf),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code: 2 for configuration problems, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Watchdog(e) if e.is_configuration_error() => 2,
            Self::Watchdog(_) => 1,
            Self::ConfigRead { .. }
            | Self::UnsupportedConfigFormat(_)
            | Self::JsonError(_)
            | Self::YamlError(_) => 2,
        }
    }
}
