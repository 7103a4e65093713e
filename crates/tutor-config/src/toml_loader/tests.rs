//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tutor_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[session]
end_marker = "<<DONE>>"

[prompts]
remote_url = "https://docs.example.com/lessons"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.session.end_marker, "<<DONE>>");
    assert_eq!(config.prompts.remote_url, "https://docs.example.com/lessons");
    // Defaults preserved
    assert_eq!(config.session.chunk_size, 600);
    assert_eq!(config.model.model, "gpt-4o-mini");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::ParseError(_)));
}

#[test]
fn parse_empty_text_gives_defaults() {
    let config = parse("").unwrap();
    assert_eq!(config.model.max_tokens, 600);
    assert_eq!(config.session.kickoff_message, "Start.");
    assert_eq!(config.curriculum.general_label, "General Exercises");
}

#[test]
fn parse_curriculum_units() {
    let config = parse(
        r#"
[curriculum]
title = "Cairo Arabic"

[[curriculum.units]]
name = "Basics"
lessons = ["Greetings", "Numbers"]

[[curriculum.units]]
name = "Travel"
lessons = ["Market"]
"#,
    )
    .unwrap();
    assert_eq!(config.curriculum.title, "Cairo Arabic");
    assert_eq!(config.curriculum.units.len(), 2);
    assert_eq!(config.curriculum.units[0].lessons, vec!["Greetings", "Numbers"]);
    assert_eq!(config.curriculum.general_label, "General Exercises");
}

#[test]
fn load_with_invalid_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\nmax_tokens = 0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.max_tokens, 0);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.curriculum.title, "Egyptian Dialect AI Tutor");
    assert_eq!(config.curriculum.units[0].name, "Unit 1");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TutorConfig;

    let config: TutorConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn template_keeps_every_section_after_end_marker_line() {
    use super::template::default_config_toml;

    let text = default_config_toml();
    assert!(text.contains("# end_marker = \"### END_OF_LESSON\""));
    assert!(text.contains("[curriculum]"));
    assert!(text.trim_end().ends_with("# trace, debug, info, warn, error"));

    let config = parse(&text).unwrap();
    assert_eq!(config.session.end_marker, "### END_OF_LESSON");
    assert_eq!(config.curriculum.units[0].lessons, vec!["Lesson 1"]);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn default_config_path_ends_in_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("tutor/config.toml"));
    }
}
