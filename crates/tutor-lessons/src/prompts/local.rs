//! Prompt files on local disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{prompt_path, PromptKind, PromptSource};

/// Reads prompts from `<root>/base.txt` and `<root>/<unit>/<lesson>/<section>.txt`.
#[derive(Debug, Clone)]
pub struct LocalPromptSource {
    root: PathBuf,
}

impl LocalPromptSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

#[async_trait]
impl PromptSource for LocalPromptSource {
    async fn fetch_prompt_text(&self, unit: &str, lesson: &str, kind: PromptKind) -> String {
        let path = self.resolve(&prompt_path(unit, lesson, kind));
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "loaded local prompt");
                text
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "local prompt not found");
                String::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read local prompt");
                String::new()
            }
        }
    }
}
