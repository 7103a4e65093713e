//! Prompt source settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    /// Directory holding `base.txt` and `<unit>/<lesson>/<section>.txt`.
    pub local_dir: String,
    /// Base URL of the remote document store. Empty disables it.
    pub remote_url: String,
    /// Environment variable whose presence marks a hosted runtime.
    pub hosted_env_var: String,
    pub max_retries: u32,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            local_dir: "prompts".into(),
            remote_url: String::new(),
            hosted_env_var: "TUTOR_HOSTED".into(),
            max_retries: 2,
        }
    }
}
