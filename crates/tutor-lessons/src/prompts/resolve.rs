//! Runtime-dependent choice between remote and local prompts.

use async_trait::async_trait;
use tracing::{debug, info};
use tutor_common::TutorError;
use tutor_config::PromptsConfig;

use super::{LocalPromptSource, PromptKind, PromptSource, RemotePromptSource};

/// Returns `true` if the environment variable `var` marks a hosted runtime.
pub fn is_hosted_runtime(var: &str) -> bool {
    hosted_flag(std::env::var(var).ok().as_deref())
}

fn hosted_flag(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        Some(v) => !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"),
        None => false,
    }
}

/// On a hosted runtime with a remote store configured, the remote store
/// has priority and local files are the fallback. Everywhere else only
/// local files are read.
pub struct ResolvingPromptSource {
    local: LocalPromptSource,
    remote: Option<RemotePromptSource>,
    hosted: bool,
}

impl ResolvingPromptSource {
    pub fn new(local: LocalPromptSource, remote: Option<RemotePromptSource>, hosted: bool) -> Self {
        Self {
            local,
            remote,
            hosted,
        }
    }

    pub fn from_config(config: &PromptsConfig) -> Result<Self, TutorError> {
        let hosted = is_hosted_runtime(&config.hosted_env_var);
        let remote = if config.remote_url.trim().is_empty() {
            None
        } else {
            Some(RemotePromptSource::new(
                config.remote_url.trim(),
                config.max_retries,
            )?)
        };

        let source = Self::new(LocalPromptSource::new(&config.local_dir), remote, hosted);
        info!(
            hosted,
            remote = source.uses_remote(),
            local_dir = %config.local_dir,
            "prompt source configured"
        );
        Ok(source)
    }

    /// Whether fetches go to the remote store first.
    pub fn uses_remote(&self) -> bool {
        self.hosted && self.remote.is_some()
    }
}

#[async_trait]
impl PromptSource for ResolvingPromptSource {
    async fn fetch_prompt_text(&self, unit: &str, lesson: &str, kind: PromptKind) -> String {
        if self.hosted {
            if let Some(remote) = &self.remote {
                let text = remote.fetch_prompt_text(unit, lesson, kind).await;
                if !text.trim().is_empty() {
                    return text;
                }
                debug!(unit, lesson, ?kind, "remote prompt empty, falling back to local");
            }
        }
        self.local.fetch_prompt_text(unit, lesson, kind).await
    }
}
