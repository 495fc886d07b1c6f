//! Batch resolution of one invoice.
//!
//! A [`ResolutionJob`] bundles the parsed invoice (seller and lines) with the
//! catalog pages to match against. [`JobRunner`] embeds both catalogs, then
//! resolves the seller and every line concurrently.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::JobError;

use std::path::Path;
use std::sync::Arc;

use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::adapter::{ItemAdapter, PartnerAdapter};
use crate::config::Config;
use crate::entity::{ItemCandidate, LineItemQuery, PartnerCandidate, PartnerQuery};
use crate::events::EventSink;
use crate::index::EmbeddingIndex;
use crate::oracle::{Completer, Embedder};
use crate::resolver::{ItemResolver, PartnerResolver, Resolution, Resolver};

/// Invoice plus catalog, as read from a job file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionJob {
    pub seller: Option<PartnerQuery>,
    pub lines: Vec<LineItemQuery>,
    pub partners: Vec<PartnerCandidate>,
    pub items: Vec<ItemCandidate>,
}

impl ResolutionJob {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, JobError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| JobError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| JobError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolutions for one job; `lines` follows the job's line order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobReport {
    pub seller: Resolution,
    pub lines: Vec<Resolution>,
}

pub struct JobRunner {
    partners: PartnerResolver,
    items: ItemResolver,
    embedder: Arc<dyn Embedder>,
    sink: Arc<dyn EventSink>,
}

impl JobRunner {
    /// Both resolvers share the oracles and sink; fallback codes and gate
    /// thresholds come from `config`.
    pub fn new(
        config: &Config,
        embedder: Arc<dyn Embedder>,
        completer: Arc<dyn Completer>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let partners = Resolver::new(PartnerAdapter::default(), embedder.clone(), completer.clone())
            .with_fallback_code(&config.partner_fallback)
            .with_gate(config.gate)
            .with_sink(sink.clone());
        let items = Resolver::new(ItemAdapter::default(), embedder.clone(), completer)
            .with_fallback_code(&config.item_fallback)
            .with_gate(config.gate)
            .with_sink(sink.clone());

        Self {
            partners,
            items,
            embedder,
            sink,
        }
    }

    pub async fn run(&self, job: &ResolutionJob) -> JobReport {
        info!(
            partners = job.partners.len(),
            items = job.items.len(),
            lines = job.lines.len(),
            "Building embedding indices"
        );

        let (partner_index, item_index) = tokio::join!(
            EmbeddingIndex::build(
                self.partners.adapter(),
                &job.partners,
                self.embedder.as_ref(),
                self.sink.as_ref(),
            ),
            EmbeddingIndex::build(
                self.items.adapter(),
                &job.items,
                self.embedder.as_ref(),
                self.sink.as_ref(),
            ),
        );

        let seller = self
            .partners
            .resolve_with_prematch(job.seller.as_ref(), &job.partners, &partner_index);
        let lines = join_all(
            job.lines
                .iter()
                .map(|line| self.items.resolve(Some(line), &job.items, &item_index)),
        );

        let (seller, lines) = tokio::join!(seller, lines);
        info!(seller = seller.code(), lines = lines.len(), "Job resolved");

        JobReport { seller, lines }
    }
}
