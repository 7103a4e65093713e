//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r####"# Tutor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# model = "gpt-4o-mini"
# api_base = "https://api.openai.com/v1"
# api_key_env = "OPENAI_API_KEY"
# max_tokens = 600          # 1-16384, ordinary turns
# start_max_tokens = 1500   # >= max_tokens, used when a section is started
# temperature = 0.7         # 0.0-2.0
# max_retries = 2
# retry_backoff_ms = 500
# timeout_secs = 120

[session]
# chunk_size = 600
# end_marker = "### END_OF_LESSON"
# failure_reply = "Sorry, an error occurred while contacting the model. Please send your message again."
# kickoff_message = "Start."

[prompts]
# local_dir = "prompts"     # base.txt + <unit>/<lesson>/<section>.txt
# remote_url = ""           # document store base URL, used on hosted runtimes
# hosted_env_var = "TUTOR_HOSTED"
# max_retries = 2

[curriculum]
title = "Egyptian Dialect AI Tutor"
general_label = "General Exercises"

[[curriculum.units]]
name = "Unit 1"
lessons = ["Lesson 1"]

[logging]
# level = "info"            # trace, debug, info, warn, error
"####
    .to_string()
}
