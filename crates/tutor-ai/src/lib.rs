//! Conversation engine for the tutor.
//!
//! Provides:
//! - The [`ModelGateway`] seam and an OpenAI-compatible implementation
//! - Conversations keyed by `(unit, lesson, section)` in a [`SessionRegistry`]
//! - Per-learner registries in a [`SessionStore`]
//! - The sentence-aligned [`chunker`] used to display long replies

pub mod chunker;
pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use chunker::{chunk, Chunks, DEFAULT_CHUNK_SIZE, SENTENCE_MARKERS};
pub use openai::{OpenAiConfig, OpenAiGateway};
pub use session::{Conversation, SessionRegistry, SessionStore, TurnReply, TurnSettings};

/// A hosted chat-completion service.
///
/// One call per learner action: the full ordered message log goes in, the
/// assistant text (or a failure) comes out.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, messages: &[Message], max_tokens: u32) -> Result<String, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Model not configured: {0}")]
    NotConfigured(String),
}

impl AiError {
    /// Failures worth another attempt with the same request.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AiError::RateLimited | AiError::NetworkError(_) | AiError::Timeout
        )
    }
}

impl From<AiError> for tutor_common::TutorError {
    fn from(e: AiError) -> Self {
        tutor_common::TutorError::Ai(e.to_string())
    }
}
