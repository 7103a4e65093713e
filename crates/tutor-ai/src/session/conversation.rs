//! One conversation's message log.

use crate::{Message, Role};

/// Ordered, append-only message log starting with one system message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    completed: bool,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
            completed: false,
        }
    }

    /// The full log, system message first. This is what the model sees.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// Messages shown to the learner (system message excluded).
    pub fn visible(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never true: the system message is always present.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether the end-of-lesson marker has been seen in a reply.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn last(&self) -> &Message {
        &self.messages[self.messages.len() - 1]
    }

    pub(crate) fn push_user(&mut self, content: impl Into<String>) {
        debug_assert_ne!(self.last().role, Role::User);
        self.messages.push(Message::user(content));
    }

    pub(crate) fn push_assistant(&mut self, content: impl Into<String>) {
        debug_assert_eq!(self.last().role, Role::User);
        self.messages.push(Message::assistant(content));
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
