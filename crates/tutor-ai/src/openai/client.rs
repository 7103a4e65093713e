//! Gateway struct, request building, and response parsing.

use crate::{AiError, Message, TokenUsage};

use super::config::OpenAiConfig;

pub struct OpenAiGateway {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiGateway {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }

    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        max_tokens: u32,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": self.config.temperature,
        })
    }

    pub(crate) fn parse_response(
        &self,
        json: &serde_json::Value,
    ) -> Result<(String, TokenUsage), AiError> {
        let content = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| AiError::ParseError("response has no message content".into()))?
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok((content, usage))
    }
}
