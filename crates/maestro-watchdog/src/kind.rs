//! Names of the shipped watchdog implementations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WatchdogError;

/// Which watchdog implementation to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchdogKind {
    /// In-process timer loop for exercising the host without hardware.
    Dummy,
    /// RP100 device watchdog reached over a Unix datagram socket.
    Rp100,
}

impl WatchdogKind {
    /// All kinds, in a stable order.
    pub const ALL: [WatchdogKind; 2] = [WatchdogKind::Dummy, WatchdogKind::Rp100];

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dummy => "dummy",
            Self::Rp100 => "rp100",
        }
    }
}

impl std::fmt::Display for WatchdogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchdogKind {
    type Err = WatchdogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                WatchdogError::invalid_configuration(format!("unknown watchdog kind '{s}'"))
            })
    }
}
