//! Loading `WatchdogConfig` from disk.

use std::fs;
use std::path::Path;

use maestro_watchdog::WatchdogConfig;

use crate::error::CliError;

/// Read a JSON or YAML config file, chosen by extension.
pub fn load_config(path: &Path) -> Result<WatchdogConfig, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let yaml = match ext.as_deref() {
        Some("json") => false,
        Some("yaml" | "yml") => true,
        _ => return Err(CliError::UnsupportedConfigFormat(path.to_path_buf())),
    };

    let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    if yaml {
        Ok(serde_yaml::from_str(&text)?)
    } else {
        Ok(serde_json::from_str(&text)?)
    }
}
