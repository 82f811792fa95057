use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::processing::article::PipelineTimeouts;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so any
/// of these can live there instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory of charged-word files (one word per line, any file name)
    pub charged_dict_dir: PathBuf,
    /// Tab-separated form → lemma lexicon for word normalization
    pub lexicon_path: PathBuf,
    /// Budget for fetching one article (connect + headers + body)
    pub fetch_timeout: Duration,
    /// Budget for splitting one article into normalized words
    pub split_timeout: Duration,
    /// Max articles processed at once; None means no cap
    pub max_concurrency: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default. Malformed values are errors rather than
    /// silently falling back, since a typo in a timeout would otherwise go
    /// unnoticed.
    pub fn load() -> Result<Self> {
        Ok(Self {
            charged_dict_dir: env::var("JAUNDICE_CHARGED_DICT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/charged_dict")),
            lexicon_path: env::var("JAUNDICE_LEXICON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/lexicon.tsv")),
            fetch_timeout: parse_timeout(
                "JAUNDICE_FETCH_TIMEOUT_SECS",
                env::var("JAUNDICE_FETCH_TIMEOUT_SECS").ok(),
            )?,
            split_timeout: parse_timeout(
                "JAUNDICE_SPLIT_TIMEOUT_SECS",
                env::var("JAUNDICE_SPLIT_TIMEOUT_SECS").ok(),
            )?,
            max_concurrency: parse_concurrency(env::var("JAUNDICE_MAX_CONCURRENCY").ok())?,
        })
    }

    pub fn timeouts(&self) -> PipelineTimeouts {
        PipelineTimeouts {
            fetch: self.fetch_timeout,
            split: self.split_timeout,
        }
    }
}

const DEFAULT_TIMEOUT_SECS: f64 = 3.0;

fn parse_timeout(name: &str, raw: Option<String>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS));
    };
    let secs: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a number of seconds, got {raw:?}"))?;
    if !secs.is_finite() || secs <= 0.0 {
        anyhow::bail!("{name} must be positive, got {raw:?}");
    }
    Ok(Duration::from_secs_f64(secs))
}

fn parse_concurrency(raw: Option<String>) -> Result<Option<usize>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let limit: usize = value
                .parse()
                .with_context(|| format!("JAUNDICE_MAX_CONCURRENCY must be an integer, got {value:?}"))?;
            if limit == 0 {
                anyhow::bail!("JAUNDICE_MAX_CONCURRENCY must be at least 1");
            }
            Ok(Some(limit))
        }
    }
}
