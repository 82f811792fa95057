use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use jaundice::config::Config;
use jaundice::normalizer::lexicon::LexiconNormalizer;
use jaundice::processing::bulk::Analyzer;
use jaundice::text::charged::load_charged_words;

/// Articles used when `analyze` is run without URLs. Two of them fail on
/// purpose: one does not exist, one is on an unsupported site.
const SAMPLE_URLS: &[&str] = &[
    "https://inosmi.ru/20230206/ssha-260376601.html",
    "https://inosmi.ru/20230206/sholts-260387982.html",
    "https://inosmi.ru/20230206/evrokomissiya-260381212.html",
    "https://inosmi.ru/20230206/bennet-260382733.html",
    "https://inosmi.ru/20230206/basketbolist-260378360.html",
    "https://inosmi.ru/20230206/-guterresh-260387030.html",
    "https://inosmi.ru/20230206/siriya-260386598.html",
    "https://inosmi.ru/20230206/siriya-26598.html",
    "https://mail.ru",
];

/// Jaundice: estimate how charged news articles are.
///
/// Fetches each article, extracts its text, normalizes the words and
/// reports the percentage that appear in a charged-word dictionary.
#[derive(Parser)]
#[command(name = "jaundice", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score articles and print a report
    Analyze {
        /// Article URLs (defaults to a built-in sample list)
        urls: Vec<String>,

        /// Max articles processed at once (overrides JAUNDICE_MAX_CONCURRENCY)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Print outcomes as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("jaundice=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            urls,
            concurrency,
            json,
        } => {
            let urls: Vec<String> = if urls.is_empty() {
                SAMPLE_URLS.iter().map(|u| u.to_string()).collect()
            } else {
                urls
            };

            let charged_words = Arc::new(load_charged_words(&config.charged_dict_dir)?);
            let analyzer = build_analyzer(&config)?
                .with_max_concurrency(concurrency.or(config.max_concurrency));

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg} ({elapsed})")
                    .context("Invalid spinner template")?,
            );
            spinner.set_message(format!("Analyzing {} articles", urls.len()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcomes = analyzer.process_all(&urls, charged_words).await;
            spinner.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                jaundice::output::terminal::display_outcomes(&outcomes);
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let charged_words = Arc::new(load_charged_words(&config.charged_dict_dir)?);
            let analyzer = build_analyzer(&config)?.with_max_concurrency(config.max_concurrency);
            info!(
                hosts = ?analyzer.sanitizers().hosts(),
                charged_words = charged_words.len(),
                "Starting API server"
            );

            let state = jaundice::web::AppState {
                analyzer,
                charged_words,
            };
            jaundice::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

/// Load the lexicon and build the shared analyzer.
///
/// The lexicon is the expensive part; it is loaded exactly once here and
/// shared by every pipeline for the life of the process.
fn build_analyzer(config: &Config) -> Result<Analyzer> {
    let lexicon = LexiconNormalizer::load(&config.lexicon_path).with_context(|| {
        format!(
            "Could not load the word lexicon. Set JAUNDICE_LEXICON_PATH \
             (currently {}) to a form<TAB>lemma file.",
            config.lexicon_path.display()
        )
    })?;
    info!(entries = lexicon.len(), "Word normalizer ready");

    Ok(Analyzer::new(Arc::new(lexicon))?.with_timeouts(config.timeouts()))
}
