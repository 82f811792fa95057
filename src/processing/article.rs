// Per-article pipeline.
//
// hostname check → fetch → sanitize → split into words → score. Each stage
// fails with a typed error; process_article maps the error to a terminal
// status exactly once and always returns an outcome.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use super::fetch::{fetch, FetchError};
use super::models::{ProcessingOutcome, ProcessingStatus};
use super::timing::ExecutionTimer;
use crate::adapters::SanitizerRegistry;
use crate::normalizer::traits::WordNormalizer;
use crate::text::charged::ChargedWordSet;
use crate::text::jaundice::calculate_jaundice_rate;
use crate::text::tokenizer::{split_by_words, SplitTimeout};

/// Independent budgets for the two slow stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineTimeouts {
    pub fetch: Duration,
    pub split: Duration,
}

impl Default for PipelineTimeouts {
    fn default() -> Self {
        Self {
            fetch: Duration::from_secs(3),
            split: Duration::from_secs(3),
        }
    }
}

/// Everything a pipeline run borrows from its caller.
pub struct ArticleContext<'a> {
    pub client: &'a Client,
    pub normalizer: &'a dyn WordNormalizer,
    pub sanitizers: &'a SanitizerRegistry,
    pub charged_words: &'a ChargedWordSet,
    pub timeouts: PipelineTimeouts,
}

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("no sanitizer for {0:?}")]
    UnsupportedSource(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Split(#[from] SplitTimeout),
}

impl ArticleError {
    pub fn status(&self) -> ProcessingStatus {
        match self {
            ArticleError::UnsupportedSource(_) => ProcessingStatus::ParsingError,
            ArticleError::Fetch(FetchError::DeadlineExceeded { .. }) => ProcessingStatus::Timeout,
            ArticleError::Fetch(_) => ProcessingStatus::FetchError,
            ArticleError::Split(_) => ProcessingStatus::Timeout,
        }
    }
}

/// Word count and jaundice rate of one successfully analyzed article.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleScore {
    pub word_count: usize,
    pub jaundice_rate: f64,
}

/// Run the whole pipeline for `url`. Never fails: errors become statuses.
pub async fn process_article(ctx: &ArticleContext<'_>, url: &str) -> ProcessingOutcome {
    let outcome = ProcessingOutcome::pending(url);

    match analyze_article(ctx, url).await {
        Ok(score) => {
            info!(
                url,
                words = score.word_count,
                jaundice_rate = score.jaundice_rate,
                "Article scored"
            );
            outcome.succeed(score.word_count, score.jaundice_rate)
        }
        Err(e) => {
            let status = e.status();
            warn!(url, %status, error = %e, "Article not scored");
            outcome.fail(status)
        }
    }
}

/// The fallible part of the pipeline.
pub async fn analyze_article(
    ctx: &ArticleContext<'_>,
    url: &str,
) -> Result<ArticleScore, ArticleError> {
    let host = hostname(url).ok_or_else(|| ArticleError::UnsupportedSource(url.to_string()))?;
    let sanitizer = ctx
        .sanitizers
        .get(&host)
        .ok_or(ArticleError::UnsupportedSource(host))?;

    let html = fetch(ctx.client, url, ctx.timeouts.fetch).await?;
    let text = sanitizer.sanitize(&html, true);

    let words = {
        let _timer = ExecutionTimer::start("Word splitting", url);
        split_by_words(ctx.normalizer, &text, ctx.timeouts.split).await?
    };

    Ok(ArticleScore {
        word_count: words.len(),
        jaundice_rate: calculate_jaundice_rate(&words, ctx.charged_words),
    })
}

/// Lower-cased hostname of an absolute URL, if it has one.
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().map(|h| h.to_ascii_lowercase())
}
