//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod curriculum;
mod helpers;
mod misc;


use crate::schema::TutorConfig;
use tutor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TutorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_model(&mut errors, config);
    misc::validate_session(&mut errors, config);
    misc::validate_logging(&mut errors, config);
    curriculum::validate_curriculum(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
