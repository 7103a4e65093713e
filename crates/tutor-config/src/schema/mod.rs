//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod curriculum;
mod logging;
mod model;
mod prompts;
mod session;

pub use curriculum::*;
pub use logging::*;
pub use model::*;
pub use prompts::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the tutor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub prompts: PromptsConfig,
    pub curriculum: CurriculumConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TutorConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.model.max_tokens, 600);
        assert_eq!(config.model.start_max_tokens, 1500);
        assert_eq!(config.session.chunk_size, 600);
        assert_eq!(config.session.end_marker, "### END_OF_LESSON");
        assert_eq!(config.prompts.hosted_env_var, "TUTOR_HOSTED");
        assert_eq!(config.curriculum.units.len(), 1);
        assert_eq!(config.curriculum.units[0].name, "Unit 1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn units_parse_from_array_of_tables() {
        let config: TutorConfig = toml::from_str(
            r#"
[[curriculum.units]]
name = "Greetings"
lessons = ["Hello", "Goodbye"]

[[curriculum.units]]
name = "Food"
lessons = ["Ordering"]
"#,
        )
        .unwrap();
        assert_eq!(config.curriculum.units.len(), 2);
        assert_eq!(config.curriculum.units[0].lessons, vec!["Hello", "Goodbye"]);
        assert_eq!(config.curriculum.units[1].name, "Food");
        assert_eq!(config.curriculum.general_label, "General Exercises");
    }

    #[test]
    fn default_round_trips_through_toml() {
        let config = TutorConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: TutorConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.session.failure_reply, config.session.failure_reply);
        assert_eq!(parsed.curriculum.units[0].lessons, vec!["Lesson 1"]);
    }
}
