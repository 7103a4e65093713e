//! One registry per learner.

use std::collections::HashMap;

use tracing::debug;
use tutor_common::SessionId;

use super::registry::{SessionRegistry, TurnSettings};

/// Learner-scoped registries. Conversations are never shared between
/// learners.
#[derive(Debug, Default)]
pub struct SessionStore {
    registries: HashMap<SessionId, SessionRegistry>,
    settings: TurnSettings,
}

impl SessionStore {
    pub fn new(settings: TurnSettings) -> Self {
        Self {
            registries: HashMap::new(),
            settings,
        }
    }

    /// The learner's registry, created on first access.
    pub fn registry(&mut self, id: &SessionId) -> &mut SessionRegistry {
        let settings = &self.settings;
        self.registries.entry(*id).or_insert_with(|| {
            debug!(session = %id, "learner session opened");
            SessionRegistry::new(settings.clone())
        })
    }

    pub fn get(&self, id: &SessionId) -> Option<&SessionRegistry> {
        self.registries.get(id)
    }

    /// Tear down a learner's registry. Returns whether one existed.
    pub fn end(&mut self, id: &SessionId) -> bool {
        let existed = self.registries.remove(id).is_some();
        if existed {
            debug!(session = %id, "learner session ended");
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.registries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty()
    }
}
