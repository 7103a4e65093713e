//! Prompt documents served over HTTP by a remote document store.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use tutor_common::TutorError;

use super::{prompt_path, PromptKind, PromptSource};

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Fetches `<base_url>/<prompt path>` with a bounded retry loop.
pub struct RemotePromptSource {
    base_url: String,
    max_retries: u32,
    http: reqwest::Client,
}

impl RemotePromptSource {
    pub fn new(base_url: impl Into<String>, max_retries: u32) -> Result<Self, TutorError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TutorError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_once(&self, url: &str) -> Result<Option<String>, String> {
        let response = self.http.get(url).send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }
        response.text().await.map(Some).map_err(|e| e.to_string())
    }
}

#[async_trait]
impl PromptSource for RemotePromptSource {
    async fn fetch_prompt_text(&self, unit: &str, lesson: &str, kind: PromptKind) -> String {
        let url = format!("{}/{}", self.base_url, prompt_path(unit, lesson, kind));

        let mut attempt = 0;
        loop {
            match self.fetch_once(&url).await {
                Ok(Some(text)) => {
                    debug!(%url, bytes = text.len(), "loaded remote prompt");
                    return text;
                }
                Ok(None) => {
                    debug!(%url, "remote prompt not found");
                    return String::new();
                }
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    debug!(%url, attempt, error = %e, "remote prompt fetch failed, retrying");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(e) => {
                    warn!(%url, error = %e, "remote prompt fetch failed");
                    return String::new();
                }
            }
        }
    }
}
