//! Embedding client for OpenAI-compatible `/embeddings` endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{OracleError, OracleResult};
use super::{Embedder, EmbeddingVector};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingResponse {
    #[serde(default)]
    pub(crate) data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmbeddingDatum {
    pub(crate) embedding: Vec<f32>,
}

impl EmbeddingResponse {
    pub(crate) fn into_vector(self) -> OracleResult<EmbeddingVector> {
        let vector = self
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| OracleError::MalformedResponse {
                reason: "response contains no embedding".to_string(),
            })?;

        if vector.is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(vector)
    }
}

/// Calls `POST {base_url}/embeddings` with `{ model, input }`.
#[derive(Debug, Clone)]
pub struct HttpEmbedder {
    http: HttpClient,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpEmbedder {
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> OracleResult<Self> {
        let endpoint = format!("{}/embeddings", base_url.trim_end_matches('/'));
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::Transport {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            endpoint,
            model: model.into(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> OracleResult<EmbeddingVector> {
        let mut request = self.http.post(&self.endpoint).json(&EmbeddingRequest {
            model: &self.model,
            input: text,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| OracleError::Transport {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| OracleError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        let vector = parsed.into_vector()?;
        debug!(
            model = %self.model,
            text_len = text.len(),
            dim = vector.len(),
            "Embedding generated"
        );
        Ok(vector)
    }
}
