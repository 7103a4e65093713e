//! ModelGateway implementation for OpenAiGateway.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{AiError, Message, ModelGateway};

use super::client::OpenAiGateway;

impl OpenAiGateway {
    async fn send_once(&self, messages: &[Message], max_tokens: u32) -> Result<String, AiError> {
        let body = self.build_request_body(messages, max_tokens);

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let (content, usage) = self.parse_response(&json)?;
        debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "chat completion usage"
        );
        Ok(content)
    }
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn complete(&self, messages: &[Message], max_tokens: u32) -> Result<String, AiError> {
        debug!(
            model = %self.config.model,
            messages = messages.len(),
            max_tokens,
            "chat completion request"
        );

        let mut attempt = 0;
        loop {
            match self.send_once(messages, max_tokens).await {
                Ok(content) => return Ok(content),
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "chat completion failed, retrying");
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
