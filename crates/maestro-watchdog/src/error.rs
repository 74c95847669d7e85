//! Error types for watchdog operations.
//!
//! Only setup-time problems and host misuse are returned as errors. I/O
//! trouble during steady-state keepalives is logged by the implementation and
//! absorbed, since the host has to keep running whatever the watchdog does.

use thiserror::Error;

/// Errors that can occur during watchdog operations.
#[derive(Debug, Error)]
pub enum WatchdogError {
    /// A required configuration option was left empty.
    #[error("Missing required option '{0}'")]
    MissingOption(&'static str),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operation that needs `setup` was called before it.
    #[error("Watchdog has not been set up")]
    NotSetUp,

    /// OS-level failure, e.g. the keepalive loop thread could not be spawned.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatchdogError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Whether this error stems from the host-supplied configuration.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingOption(_) | Self::InvalidConfiguration(_))
    }
}

/// A specialized `Result` type for watchdog operations.
pub type WatchdogResult<T> = std::result::Result<T, WatchdogError>;
