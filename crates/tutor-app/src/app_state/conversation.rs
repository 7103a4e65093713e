//! Sending learner turns through the registry.

use std::sync::Arc;

use tracing::warn;
use tutor_ai::TurnReply;
use tutor_common::{ConversationKey, Notice, TutorError};
use tutor_lessons::compose_system_prompt;

use super::core::TutorApp;

impl TutorApp {
    /// Restart the current section and ask for its opening explanation.
    ///
    /// Returns `None` when the prompt content is missing; the previous
    /// conversation is left in place in that case.
    pub async fn start(&mut self) -> Option<TurnReply> {
        let key = self.key();
        let prompt = self.system_prompt(&key).await?;
        let gateway = Arc::clone(&self.gateway);
        let result = self.registry().start(gateway.as_ref(), &key, &prompt).await;
        self.finish_turn(&key, result)
    }

    /// Send learner text to the current section, opening its conversation
    /// first if needed. Completed sections refuse input.
    pub async fn submit(&mut self, text: &str) -> Option<TurnReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let key = self.key();
        if self.registry().is_completed(&key) {
            self.notify(Notice::info(
                "Section complete",
                "Use /start to go through it again, or pick another section.",
            ));
            return None;
        }

        if self.registry().conversation(&key).is_none() {
            let prompt = self.system_prompt(&key).await?;
            self.registry().ensure(&key, &prompt);
        }

        let gateway = Arc::clone(&self.gateway);
        let result = self
            .registry()
            .submit_turn(gateway.as_ref(), &key, text)
            .await;
        self.finish_turn(&key, result)
    }

    async fn system_prompt(&mut self, key: &ConversationKey) -> Option<String> {
        let composed = compose_system_prompt(self.prompts.as_ref(), key).await;
        match composed {
            Ok(prompt) => Some(prompt),
            Err(e) => {
                warn!(%key, error = %e, "conversation not opened");
                self.notify(Notice::warning("Content unavailable", e.to_string()));
                None
            }
        }
    }

    fn finish_turn(
        &mut self,
        key: &ConversationKey,
        result: Result<TurnReply, TutorError>,
    ) -> Option<TurnReply> {
        match result {
            Ok(reply) => {
                if let Some(e) = &reply.failure {
                    self.notify(Notice::error("Model unavailable", e.to_string()));
                } else if reply.completed {
                    self.notify(Notice::info(
                        "Lesson complete",
                        format!("You finished {} of {}.", key.section, key.lesson),
                    ));
                }
                Some(reply)
            }
            Err(e) => {
                self.notify(Notice::error("Turn failed", e.to_string()));
                None
            }
        }
    }
}
