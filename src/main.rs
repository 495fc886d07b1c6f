//! Resolver batch entrypoint: `resolver <job.json>`.

use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;

use resolver::config::Config;
use resolver::events::TracingSink;
use resolver::job::{JobRunner, ResolutionJob};
use resolver::oracle::{ChatCompleter, HttpEmbedder};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let job_path = std::env::args()
        .nth(1)
        .context("usage: resolver <job.json>")?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        job = %job_path,
        embedding_model = %config.embedding_model,
        chat_model = %config.chat_model,
        "Resolver starting"
    );

    let job = ResolutionJob::from_path(&job_path)?;

    let embedder = HttpEmbedder::new(
        &config.embedding_url,
        config.embedding_model.clone(),
        config.embedding_api_key.clone(),
        config.request_timeout,
    )?;
    let completer = ChatCompleter::new(config.chat_model.clone());

    let runner = JobRunner::new(
        &config,
        Arc::new(embedder),
        Arc::new(completer),
        Arc::new(TracingSink),
    );
    let report = runner.run(&job).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
