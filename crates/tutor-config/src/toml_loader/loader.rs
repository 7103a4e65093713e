//! Reading and parsing config files.

use std::path::Path;

use tracing::{info, warn};
use tutor_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::TutorConfig;
use crate::validation;

/// Parse TOML text. Absent sections and fields take their defaults.
pub fn parse(text: &str) -> Result<TutorConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Read and parse `path`. Out-of-range values are logged, not rejected;
/// [`crate::load_config`] is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<TutorConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;
    let config = parse(&text)?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load the platform default config, writing the commented template on
/// first run. A template that cannot be written still yields defaults.
pub fn load_default() -> Result<TutorConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    if let Err(e) = create_default_config(&path) {
        warn!("{e}");
    }
    Ok(TutorConfig::default())
}
