//! Prompt text sources.
//!
//! A prompt source answers `fetch_prompt_text(unit, lesson, kind)` with the
//! stored text, or an empty string when there is none. Sources never fail:
//! transport and filesystem problems are logged and read as "no content".

mod local;
mod remote;
mod resolve;

pub use local::LocalPromptSource;
pub use remote::RemotePromptSource;
pub use resolve::{is_hosted_runtime, ResolvingPromptSource};

use async_trait::async_trait;
use tutor_common::{ConversationKey, Section, TutorError};

/// Which piece of prompt text to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Course-wide teaching instructions, shared by every conversation.
    Base,
    /// Content for one section of one lesson.
    Section(Section),
}

#[async_trait]
pub trait PromptSource: Send + Sync {
    /// Returns the prompt text, or an empty string if none is available.
    async fn fetch_prompt_text(&self, unit: &str, lesson: &str, kind: PromptKind) -> String;
}

/// Lowercase, whitespace runs collapsed to `-`, punctuation dropped.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.extend(ch.to_lowercase());
        } else if (ch.is_whitespace() || ch == '-') && !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Relative, `/`-separated location of a prompt, shared by every source.
pub fn prompt_path(unit: &str, lesson: &str, kind: PromptKind) -> String {
    match kind {
        PromptKind::Base => "base.txt".to_string(),
        PromptKind::Section(section) => {
            format!("{}/{}/{}.txt", slug(unit), slug(lesson), section)
        }
    }
}

/// Build the system message for a conversation: base instructions, a blank
/// line, then the section content. Either part missing is reported as
/// [`TutorError::MissingContent`].
pub async fn compose_system_prompt(
    source: &dyn PromptSource,
    key: &ConversationKey,
) -> Result<String, TutorError> {
    let base = source
        .fetch_prompt_text(&key.unit, &key.lesson, PromptKind::Base)
        .await;
    if base.trim().is_empty() {
        return Err(TutorError::MissingContent {
            key: key.to_string(),
            what: "base instructions".into(),
        });
    }

    let content = source
        .fetch_prompt_text(&key.unit, &key.lesson, PromptKind::Section(key.section))
        .await;
    if content.trim().is_empty() {
        return Err(TutorError::MissingContent {
            key: key.to_string(),
            what: format!("{} content", key.section),
        });
    }

    Ok(format!("{}\n\n{}", base.trim(), content.trim()))
}
