//! Model gateway settings.

use serde::{Deserialize, Serialize};

/// Chat-completion endpoint and request budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub model: String,
    /// Base URL of an OpenAI-compatible API (`/chat/completions` is appended).
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Output token budget for ordinary turns.
    pub max_tokens: u32,
    /// Output token budget when a section is (re)started.
    pub start_max_tokens: u32,
    pub temperature: f64,
    /// Extra attempts after a transient failure (rate limit, network, timeout).
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            api_base: "https://api.openai.com/v1".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            max_tokens: 600,
            start_max_tokens: 1500,
            temperature: 0.7,
            max_retries: 2,
            retry_backoff_ms: 500,
            timeout_secs: 120,
        }
    }
}
