//! Where the config file lives, and first-run creation.

use std::path::{Path, PathBuf};

use tracing::info;
use tutor_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "tutor";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/tutor/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config_toml())
    };
    write().map_err(|e| ConfigError::ParseError(format!("cannot write {}: {e}", path.display())))?;

    info!(path = %path.display(), "default config written");
    Ok(())
}
