//! Validation for the model, session, and logging sections.

use crate::schema::TutorConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

const MAX_TOKEN_BUDGET: u64 = 16_384;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &TutorConfig) {
    let model = &config.model;
    validate_non_empty(errors, "model.model", &model.model);
    validate_non_empty(errors, "model.api_base", &model.api_base);
    validate_range(
        errors,
        "model.max_tokens",
        u64::from(model.max_tokens),
        1,
        MAX_TOKEN_BUDGET,
    );
    validate_range(
        errors,
        "model.start_max_tokens",
        u64::from(model.start_max_tokens),
        1,
        MAX_TOKEN_BUDGET,
    );
    if model.start_max_tokens < model.max_tokens {
        errors.push(format!(
            "model.start_max_tokens = {} must be >= model.max_tokens = {}",
            model.start_max_tokens, model.max_tokens
        ));
    }
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(errors, "model.max_retries", u64::from(model.max_retries), 0, 10);
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);
}

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &TutorConfig) {
    let session = &config.session;
    validate_range(
        errors,
        "session.chunk_size",
        session.chunk_size as u64,
        1,
        100_000,
    );
    validate_non_empty(errors, "session.end_marker", &session.end_marker);
    validate_non_empty(errors, "session.failure_reply", &session.failure_reply);
    validate_non_empty(errors, "session.kickoff_message", &session.kickoff_message);
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &TutorConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
