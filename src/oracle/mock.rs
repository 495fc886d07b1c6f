//! Scripted oracles for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::{OracleError, OracleResult};
use super::{Completer, Embedder, EmbeddingVector};

/// Embedder returning preset vectors by exact text, a default otherwise.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, EmbeddingVector>,
    default: Option<EmbeddingVector>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    /// Returns `vector` for every text.
    pub fn constant(vector: EmbeddingVector) -> Self {
        Self {
            default: Some(vector),
            ..Default::default()
        }
    }

    /// Fails every call with a transport error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: EmbeddingVector) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> OracleResult<EmbeddingVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(OracleError::Transport {
                endpoint: "mock://embeddings".to_string(),
                message: message.clone(),
            });
        }

        self.vectors
            .get(text)
            .or(self.default.as_ref())
            .cloned()
            .ok_or_else(|| OracleError::MalformedResponse {
                reason: format!("no mock vector for {text:?}"),
            })
    }
}

/// Completer returning a fixed answer and recording prompts.
#[derive(Debug, Default)]
pub struct MockCompleter {
    answer: Option<String>,
    failure: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockCompleter {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            ..Default::default()
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl Completer for MockCompleter {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        self.prompts.lock().push(prompt.to_string());

        if let Some(message) = &self.failure {
            return Err(OracleError::Provider(message.clone()));
        }
        Ok(self.answer.clone().unwrap_or_default())
    }
}
