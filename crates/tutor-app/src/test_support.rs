//! Fixtures shared by the shell and app-state tests.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tutor_ai::{AiError, Message, ModelGateway};
use tutor_config::{TutorConfig, UnitConfig};
use tutor_lessons::LocalPromptSource;

use crate::app_state::TutorApp;

/// Replays canned results, then answers `"ok"`. Records every call.
#[derive(Default)]
pub struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    calls: Mutex<Vec<(Vec<Message>, u32)>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, AiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Vec<Message>, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for ScriptedGateway {
    async fn complete(&self, messages: &[Message], max_tokens: u32) -> Result<String, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), max_tokens));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }
}

/// Two units: "Basics" (Greetings, Numbers) and "Travel" (Market).
pub fn test_config() -> TutorConfig {
    let mut config = TutorConfig::default();
    config.curriculum.units = vec![
        UnitConfig {
            name: "Basics".into(),
            lessons: vec!["Greetings".into(), "Numbers".into()],
        },
        UnitConfig {
            name: "Travel".into(),
            lessons: vec!["Market".into()],
        },
    ];
    config.session.chunk_size = 40;
    config
}

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

/// A prompt directory with content for every section except
/// `basics/numbers/grammar`.
pub fn prompt_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "base.txt", "You are a patient tutor.\n");
    for (unit, lesson) in [("basics", "greetings"), ("basics", "numbers"), ("travel", "market")] {
        for section in ["explanation", "practice", "grammar"] {
            if (lesson, section) == ("numbers", "grammar") {
                continue;
            }
            write(
                root,
                &format!("{unit}/{lesson}/{section}.txt"),
                &format!("{lesson} {section} content"),
            );
        }
    }
    write(root, "basics/general-exercises/general.txt", "basics review");
    write(root, "travel/general-exercises/general.txt", "travel review");
    dir
}

pub struct Fixture {
    pub app: TutorApp,
    pub gateway: Arc<ScriptedGateway>,
    _prompts: TempDir,
}

pub fn fixture(replies: Vec<Result<String, AiError>>) -> Fixture {
    let prompts = prompt_dir();
    let gateway = Arc::new(ScriptedGateway::new(replies));
    let app = TutorApp::new(
        test_config(),
        Arc::new(LocalPromptSource::new(prompts.path())),
        gateway.clone(),
    )
    .unwrap();
    Fixture {
        app,
        gateway,
        _prompts: prompts,
    }
}
