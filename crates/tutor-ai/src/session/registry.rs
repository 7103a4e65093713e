//! Per-learner conversation registry and the model round-trip.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use tutor_common::{ConversationKey, TutorError};
use tutor_config::TutorConfig;

use crate::{AiError, ModelGateway};

use super::conversation::Conversation;

/// Budgets and fixed texts applied to every turn.
#[derive(Debug, Clone)]
pub struct TurnSettings {
    /// Output token budget for ordinary turns.
    pub max_tokens: u32,
    /// Output token budget for the opening turn of a (re)started section.
    pub start_max_tokens: u32,
    pub end_marker: String,
    /// Recorded as the assistant turn when the gateway fails.
    pub failure_reply: String,
    /// User turn that opens a started section.
    pub kickoff_message: String,
}

impl TurnSettings {
    pub fn from_config(config: &TutorConfig) -> Self {
        Self {
            max_tokens: config.model.max_tokens,
            start_max_tokens: config.model.start_max_tokens,
            end_marker: config.session.end_marker.clone(),
            failure_reply: config.session.failure_reply.clone(),
            kickoff_message: config.session.kickoff_message.clone(),
        }
    }
}

impl Default for TurnSettings {
    fn default() -> Self {
        Self::from_config(&TutorConfig::default())
    }
}

/// Result of one model round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReply {
    /// Assistant text as recorded in the conversation. On failure this is
    /// the configured apology.
    pub text: String,
    /// The gateway error, if the call failed.
    pub failure: Option<AiError>,
    /// Whether the conversation is now marked complete.
    pub completed: bool,
}

impl TurnReply {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Returns `true` if `text` contains the end-of-lesson `marker`.
pub fn contains_end_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}

/// Every conversation of one learner, keyed by `(unit, lesson, section)`.
///
/// Mutated only from the learner's single request path; one turn at a time.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    conversations: HashMap<ConversationKey, Conversation>,
    settings: TurnSettings,
}

impl SessionRegistry {
    pub fn new(settings: TurnSettings) -> Self {
        Self {
            conversations: HashMap::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &TurnSettings {
        &self.settings
    }

    /// Create `[system]` for `key` if absent. An existing conversation,
    /// including its system message, is left untouched.
    pub fn ensure(&mut self, key: &ConversationKey, system_prompt: &str) -> &Conversation {
        self.conversations.entry(key.clone()).or_insert_with(|| {
            debug!(%key, "conversation created");
            Conversation::new(system_prompt)
        })
    }

    /// Replace the conversation at `key` with a fresh `[system]`, discarding
    /// all prior turns and the completed flag.
    pub fn restart(&mut self, key: &ConversationKey, system_prompt: &str) -> &Conversation {
        let previous = self
            .conversations
            .insert(key.clone(), Conversation::new(system_prompt));
        info!(
            %key,
            discarded = previous.map_or(0, |c| c.len()),
            "conversation restarted"
        );
        &self.conversations[key]
    }

    /// Append the learner's text, send the whole log with the ordinary
    /// budget, and append the reply.
    pub async fn submit_turn(
        &mut self,
        gateway: &dyn ModelGateway,
        key: &ConversationKey,
        user_text: &str,
    ) -> Result<TurnReply, TutorError> {
        let budget = self.settings.max_tokens;
        self.submit_turn_with_budget(gateway, key, user_text, budget)
            .await
    }

    /// [`submit_turn`](Self::submit_turn) with an explicit token budget.
    ///
    /// Gateway failures do not escape: the user turn stays in the log and
    /// the configured apology is appended as the assistant turn, so the
    /// log stays balanced. The only error is a missing conversation.
    pub async fn submit_turn_with_budget(
        &mut self,
        gateway: &dyn ModelGateway,
        key: &ConversationKey,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<TurnReply, TutorError> {
        let conversation = self
            .conversations
            .get_mut(key)
            .ok_or_else(|| TutorError::NoConversation(key.to_string()))?;

        conversation.push_user(user_text);
        debug!(%key, messages = conversation.len(), max_tokens, "submitting turn");

        let (text, failure) = match gateway.complete(conversation.messages(), max_tokens).await {
            Ok(text) => (text, None),
            Err(e) => {
                warn!(%key, error = %e, "model call failed, recording apology");
                (self.settings.failure_reply.clone(), Some(e))
            }
        };

        conversation.push_assistant(text.as_str());
        let completed = failure.is_none() && self.termination_signal(key, &text);

        Ok(TurnReply {
            text,
            failure,
            completed: completed || self.is_completed(key),
        })
    }

    /// Restart the section with `system_prompt` and open it with the
    /// kickoff turn under the larger start budget.
    pub async fn start(
        &mut self,
        gateway: &dyn ModelGateway,
        key: &ConversationKey,
        system_prompt: &str,
    ) -> Result<TurnReply, TutorError> {
        self.restart(key, system_prompt);
        let kickoff = self.settings.kickoff_message.clone();
        let budget = self.settings.start_max_tokens;
        self.submit_turn_with_budget(gateway, key, &kickoff, budget)
            .await
    }

    /// If `assistant_text` carries the end marker, mark the conversation
    /// at `key` complete. Returns whether the marker was found.
    pub fn termination_signal(&mut self, key: &ConversationKey, assistant_text: &str) -> bool {
        if !contains_end_marker(assistant_text, &self.settings.end_marker) {
            return false;
        }
        if let Some(conversation) = self.conversations.get_mut(key) {
            if !conversation.is_completed() {
                info!(%key, "lesson complete");
            }
            conversation.mark_completed();
        }
        true
    }

    pub fn conversation(&self, key: &ConversationKey) -> Option<&Conversation> {
        self.conversations.get(key)
    }

    pub fn is_completed(&self, key: &ConversationKey) -> bool {
        self.conversations
            .get(key)
            .is_some_and(Conversation::is_completed)
    }

    /// Drop every conversation of `(unit, lesson)`. Returns how many.
    pub fn drop_lesson(&mut self, unit: &str, lesson: &str) -> usize {
        let before = self.conversations.len();
        self.conversations.retain(|key, _| !key.is_lesson(unit, lesson));
        let dropped = before - self.conversations.len();
        if dropped > 0 {
            info!(unit, lesson, dropped, "lesson conversations discarded");
        }
        dropped
    }

    /// Drop every conversation.
    pub fn reset(&mut self) {
        info!(dropped = self.conversations.len(), "session reset");
        self.conversations.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &ConversationKey> {
        self.conversations.keys()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
