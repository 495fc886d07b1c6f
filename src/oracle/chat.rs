//! Completion client backed by `genai`.

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::{debug, error};

use super::Completer;
use super::error::{OracleError, OracleResult};

/// Sends the prompt as a single user message and returns the first text part.
///
/// Provider credentials are picked up by `genai` from the environment
/// (e.g. `OPENAI_API_KEY` for OpenAI models).
#[derive(Clone)]
pub struct ChatCompleter {
    client: Client,
    model: String,
}

impl std::fmt::Debug for ChatCompleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatCompleter")
            .field("model", &self.model)
            .finish()
    }
}

impl ChatCompleter {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completer for ChatCompleter {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| {
                error!(model = %self.model, "Provider error: {}", e);
                OracleError::from(e)
            })?;

        let text = response.first_text().unwrap_or_default().to_string();
        debug!(model = %self.model, answer_len = text.len(), "Completion received");
        Ok(text)
    }
}
