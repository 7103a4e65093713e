//! Tutor configuration system.
//!
//! TOML-based configuration with serde defaults for every section, so a
//! partial file (or no file at all) yields a working setup.
//!
//! ```rust,no_run
//! use tutor_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.model.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CurriculumConfig, LoggingConfig, ModelConfig, PromptsConfig, SessionConfig, TutorConfig,
    UnitConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use tutor_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// The default path gets a documented config file written on first run.
/// Either way the result is validated strictly.
pub fn load_config(path: Option<&Path>) -> Result<TutorConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
