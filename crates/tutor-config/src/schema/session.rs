//! Conversation behaviour settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum characters per displayed chunk of an assistant reply.
    pub chunk_size: usize,
    /// Token that marks a lesson as finished when it appears in a reply.
    pub end_marker: String,
    /// Assistant text recorded in place of a reply when the model call fails.
    pub failure_reply: String,
    /// User turn sent when the learner starts a section.
    pub kickoff_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chunk_size: 600,
            end_marker: "### END_OF_LESSON".into(),
            failure_reply: "Sorry, an error occurred while contacting the model. \
                            Please send your message again."
                .into(),
            kickoff_message: "Start.".into(),
        }
    }
}
