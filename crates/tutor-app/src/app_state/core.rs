//! `TutorApp` struct definition, construction and read-only views.

use std::fmt;
use std::sync::Arc;

use tracing::info;
use tutor_ai::{Message, ModelGateway, SessionRegistry, SessionStore, TurnSettings};
use tutor_common::{ConversationKey, Notice, NoticeQueue, Section, SessionId, TutorError};
use tutor_config::TutorConfig;
use tutor_lessons::{Curriculum, Navigator, PromptSource};

/// State for one learner at the terminal.
pub struct TutorApp {
    pub(super) config: TutorConfig,
    pub(super) navigator: Navigator,
    pub(super) session: SessionId,
    pub(super) store: SessionStore,
    pub(super) prompts: Arc<dyn PromptSource>,
    pub(super) gateway: Arc<dyn ModelGateway>,
    pub(super) notices: NoticeQueue,
}

/// Snapshot of the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub unit: String,
    pub lesson: String,
    pub section: Section,
    /// Sections the current lesson offers.
    pub sections: Vec<Section>,
    /// Conversations held for this learner across all lessons.
    pub active_conversations: usize,
    /// Messages in the current conversation, system message excluded.
    pub turns: usize,
    pub completed: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: Vec<&str> = self.sections.iter().map(Section::as_str).collect();
        writeln!(f, "Unit:     {}", self.unit)?;
        writeln!(f, "Lesson:   {}", self.lesson)?;
        writeln!(f, "Section:  {} (of {})", self.section, sections.join(", "))?;
        writeln!(f, "Messages: {}", self.turns)?;
        if self.completed {
            writeln!(f, "Status:   complete")?;
        }
        write!(f, "Active conversations: {}", self.active_conversations)
    }
}

impl TutorApp {
    pub fn new(
        config: TutorConfig,
        prompts: Arc<dyn PromptSource>,
        gateway: Arc<dyn ModelGateway>,
    ) -> Result<Self, TutorError> {
        let curriculum = Curriculum::from_config(&config.curriculum)?;
        info!(
            title = %curriculum.title,
            units = curriculum.units().len(),
            "curriculum loaded"
        );

        let session = SessionId::new();
        let mut store = SessionStore::new(TurnSettings::from_config(&config));
        store.registry(&session);

        Ok(Self {
            config,
            navigator: Navigator::new(curriculum),
            session,
            store,
            prompts,
            gateway,
            notices: NoticeQueue::default(),
        })
    }

    pub fn config(&self) -> &TutorConfig {
        &self.config
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Key of the conversation the learner is looking at.
    pub fn key(&self) -> ConversationKey {
        self.navigator.key()
    }

    pub(super) fn registry(&mut self) -> &mut SessionRegistry {
        self.store.registry(&self.session)
    }

    fn registry_view(&self) -> Option<&SessionRegistry> {
        self.store.get(&self.session)
    }

    /// Visible messages of the current conversation, oldest first.
    pub fn history(&self) -> Vec<Message> {
        let key = self.key();
        self.registry_view()
            .and_then(|registry| registry.conversation(&key))
            .map(|conversation| conversation.visible().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether the current section has reached the end of the lesson.
    pub fn is_completed(&self) -> bool {
        let key = self.key();
        self.registry_view()
            .is_some_and(|registry| registry.is_completed(&key))
    }

    pub fn status(&self) -> Status {
        let lesson = self.navigator.lesson();
        Status {
            unit: self.navigator.unit().name.clone(),
            lesson: lesson.name.clone(),
            section: self.navigator.section(),
            sections: lesson.sections().to_vec(),
            active_conversations: self.registry_view().map_or(0, SessionRegistry::len),
            turns: self.history().len(),
            completed: self.is_completed(),
        }
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Drop every conversation of this learner.
    pub fn reset(&mut self) {
        self.registry().reset();
        self.notify(Notice::info("Session reset", "All conversations cleared."));
    }

    /// Tear down the learner's session.
    pub fn shutdown(&mut self) {
        if self.store.end(&self.session) {
            info!(session = %self.session, "session closed");
        }
    }
}
