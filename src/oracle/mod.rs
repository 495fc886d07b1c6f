//! Capabilities the engine borrows from outside: text embedding and text completion.
//!
//! - [`Embedder`] turns a description into an [`EmbeddingVector`].
//! - [`Completer`] answers the arbitration prompt.
//!
//! [`HttpEmbedder`] and [`ChatCompleter`] talk to OpenAI-compatible providers.
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod chat;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use chat::ChatCompleter;
pub use error::{OracleError, OracleResult};
pub use http::HttpEmbedder;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCompleter, MockEmbedder};

use async_trait::async_trait;

/// Dense embedding of a text.
pub type EmbeddingVector = Vec<f32>;

#[async_trait]
/// Computes the embedding of a text.
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> OracleResult<EmbeddingVector>;
}

#[async_trait]
/// Returns a language model's answer to a single prompt.
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> OracleResult<String>;
}

#[async_trait]
impl<E: Embedder + ?Sized> Embedder for std::sync::Arc<E> {
    async fn embed(&self, text: &str) -> OracleResult<EmbeddingVector> {
        (**self).embed(text).await
    }
}

#[async_trait]
impl<C: Completer + ?Sized> Completer for std::sync::Arc<C> {
    async fn complete(&self, prompt: &str) -> OracleResult<String> {
        (**self).complete(prompt).await
    }
}
