pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use cardstmt_core::StatementConfig;

/// Per-user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardstmt")
        .join("config.json")
}

/// Path a command should read and write: `--config` if given, else the per-user file.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(default_config_path)
}

/// Load configuration from `--config`, the per-user file, or defaults.
///
/// An explicit path must exist; the per-user file is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<StatementConfig> {
    if let Some(path) = explicit {
        return StatementConfig::from_file(path)
            .with_context(|| format!("Failed to read config file {}", path.display()));
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        StatementConfig::from_file(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))
    } else {
        Ok(StatementConfig::default())
    }
}
