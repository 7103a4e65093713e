use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("ai error: {0}")]
    Ai(String),

    /// Base instructions or lesson content came back empty.
    #[error("missing content for {key}: {what}")]
    MissingContent { key: String, what: String },

    /// A turn was submitted for a conversation that was never started.
    #[error("no conversation started for {0}")]
    NoConversation(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("{0}")]
    Other(String),
}

impl TutorError {
    /// Errors the learner can recover from by retrying or picking other content.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TutorError::Config(_) | TutorError::Io(_))
    }
}
