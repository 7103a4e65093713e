//! Model gateway selection for the shell.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use tutor_ai::{AiError, Message, ModelGateway, OpenAiConfig, OpenAiGateway};
use tutor_config::ModelConfig;

/// Stands in for the real gateway when no API key is available. Every call
/// fails with [`AiError::NotConfigured`], which the session records as an
/// ordinary failed turn.
#[derive(Debug)]
pub struct UnconfiguredGateway {
    reason: String,
}

impl UnconfiguredGateway {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ModelGateway for UnconfiguredGateway {
    async fn complete(&self, _messages: &[Message], _max_tokens: u32) -> Result<String, AiError> {
        Err(AiError::NotConfigured(self.reason.clone()))
    }
}

/// The OpenAI gateway if the key is set, otherwise [`UnconfiguredGateway`].
pub fn from_config(config: &ModelConfig) -> Arc<dyn ModelGateway> {
    match OpenAiConfig::from_model_config(config).and_then(OpenAiGateway::new) {
        Ok(gateway) => {
            info!(model = gateway.model(), "model gateway ready");
            Arc::new(gateway)
        }
        Err(e) => {
            warn!(error = %e, "model gateway unavailable, every turn will fail");
            Arc::new(UnconfiguredGateway::new(e.to_string()))
        }
    }
}
