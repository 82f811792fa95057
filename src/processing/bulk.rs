// Bulk orchestration: run the article pipeline over many URLs at once.
//
// One Analyzer owns the expensive shared pieces (HTTP client, normalizer,
// sanitizer registry) and hands cheap clones of them to every pipeline.
// Each pipeline runs as its own tokio task, so a panic inside one article
// is contained to that article. Outcomes come back in completion order.
// Tasks never outlive the process_all call that spawned them: dropping that
// future (client disconnect, caller timeout) aborts every pipeline in flight.

use std::sync::Arc;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{error, info};

use super::article::{process_article, ArticleContext, PipelineTimeouts};
use super::fetch::build_client;
use super::models::ProcessingOutcome;
use crate::adapters::SanitizerRegistry;
use crate::normalizer::traits::WordNormalizer;
use crate::text::charged::ChargedWordSet;

/// Shared state for processing articles.
///
/// Construct once per process: building the normalizer is what makes this
/// expensive, and the reqwest client pools connections across calls.
#[derive(Clone)]
pub struct Analyzer {
    client: Client,
    normalizer: Arc<dyn WordNormalizer>,
    sanitizers: Arc<SanitizerRegistry>,
    timeouts: PipelineTimeouts,
    max_concurrency: Option<usize>,
}

impl Analyzer {
    /// Create an analyzer with the default sanitizers and timeouts.
    ///
    /// Fails only if the HTTP client cannot be built, which aborts the
    /// whole batch before any article is touched.
    pub fn new(normalizer: Arc<dyn WordNormalizer>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            normalizer,
            sanitizers: Arc::new(SanitizerRegistry::default()),
            timeouts: PipelineTimeouts::default(),
            max_concurrency: None,
        })
    }

    pub fn with_sanitizers(mut self, sanitizers: SanitizerRegistry) -> Self {
        self.sanitizers = Arc::new(sanitizers);
        self
    }

    pub fn with_timeouts(mut self, timeouts: PipelineTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Cap how many articles are in flight at once.
    ///
    /// `None` launches every URL immediately. That is fine for the HTTP API,
    /// which rejects more than 10 URLs per request, but unbounded fan-out
    /// over a large list will open that many connections and tasks at once.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit;
        self
    }

    pub fn sanitizers(&self) -> &SanitizerRegistry {
        &self.sanitizers
    }

    /// Process a single article in the current task.
    pub async fn process_article(
        &self,
        url: &str,
        charged_words: &ChargedWordSet,
    ) -> ProcessingOutcome {
        let ctx = ArticleContext {
            client: &self.client,
            normalizer: self.normalizer.as_ref(),
            sanitizers: &self.sanitizers,
            charged_words,
            timeouts: self.timeouts,
        };
        process_article(&ctx, url).await
    }

    /// Process every URL concurrently and return one outcome per URL.
    ///
    /// Failures never cross article boundaries: a failed article is just an
    /// outcome with a non-OK status. Order follows completion, not input.
    pub async fn process_all(
        &self,
        urls: &[String],
        charged_words: Arc<ChargedWordSet>,
    ) -> Vec<ProcessingOutcome> {
        let limit = self.max_concurrency.unwrap_or(urls.len()).max(1);
        info!(urls = urls.len(), concurrency = limit, "Processing articles");

        // buffer_unordered pulls from the stream lazily, so at most `limit`
        // tasks are spawned at any moment.
        let outcomes: Vec<ProcessingOutcome> = stream::iter(urls.iter().cloned())
            .map(|url| {
                let task = self.spawn_pipeline(url.clone(), Arc::clone(&charged_words));
                async move {
                    let _scope = AbortOnDrop(task.abort_handle());
                    match task.await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            error!(url = %url, error = %e, "Article task died");
                            ProcessingOutcome::pending(&url)
                        }
                    }
                }
            })
            .buffer_unordered(limit)
            .collect()
            .await;

        let ok = outcomes.iter().filter(|o| o.is_ok()).count();
        info!(
            total = outcomes.len(),
            ok,
            failed = outcomes.len() - ok,
            "Finished processing articles"
        );
        outcomes
    }

    fn spawn_pipeline(
        &self,
        url: String,
        charged_words: Arc<ChargedWordSet>,
    ) -> JoinHandle<ProcessingOutcome> {
        let analyzer = self.clone();
        tokio::spawn(async move { analyzer.process_article(&url, &charged_words).await })
    }
}

/// Aborts the pipeline task when the future awaiting it is dropped.
///
/// Aborting a task that already finished is a no-op, so the guard only bites
/// when `process_all` is cancelled mid-flight.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
