//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use tracing::debug;

use invext_core::InvextConfig;

/// `<config_dir>/invext/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invext")
        .join("config.json")
}

/// Configuration file named by `--config`, or the default location.
pub fn config_file(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Read `path` if it exists, defaults otherwise.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<InvextConfig> {
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(InvextConfig::from_file(path)?)
    } else {
        Ok(InvextConfig::default())
    }
}

/// Configuration for the processing commands. A file given with `--config`
/// must exist; the default location is optional.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<InvextConfig> {
    match explicit {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Ok(InvextConfig::from_file(path)?)
        }
        None => read_config_or_default(&default_config_path()),
    }
}
