// Colored terminal output for processing outcomes.

use colored::{ColoredString, Colorize};

use super::truncate_chars;
use crate::processing::models::{ProcessingOutcome, ProcessingStatus};

const URL_WIDTH: usize = 60;

/// Display one row per outcome plus a status summary.
pub fn display_outcomes(outcomes: &[ProcessingOutcome]) {
    if outcomes.is_empty() {
        println!("No articles processed.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Jaundice Report ({} articles) ===", outcomes.len()).bold()
    );
    println!();

    println!(
        "  {:<63} {:<14} {:>6}  {:>7}",
        "URL".dimmed(),
        "Status".dimmed(),
        "Words".dimmed(),
        "Rate %".dimmed(),
    );
    println!("  {}", "-".repeat(94).dimmed());

    for outcome in outcomes {
        let words = outcome
            .word_count()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        let rate = outcome
            .jaundice_rate()
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<63} {:<14} {:>6}  {:>7}",
            truncate_chars(outcome.url(), URL_WIDTH),
            colorize_status(outcome.status()),
            words,
            rate,
        );
    }

    println!();
    println!("  {}", summary_line(outcomes));
}

/// "3 ok, 1 fetch error, 1 timeout" style summary. Zero counts are omitted.
pub fn summary_line(outcomes: &[ProcessingOutcome]) -> String {
    let count = |status: ProcessingStatus| outcomes.iter().filter(|o| o.status() == status).count();

    let parts: Vec<String> = [
        (ProcessingStatus::Ok, "ok"),
        (ProcessingStatus::FetchError, "fetch error"),
        (ProcessingStatus::ParsingError, "unsupported"),
        (ProcessingStatus::Timeout, "timeout"),
    ]
    .into_iter()
    .filter_map(|(status, label)| {
        let n = count(status);
        (n > 0).then(|| format!("{n} {label}"))
    })
    .collect();

    parts.join(", ")
}

fn colorize_status(status: ProcessingStatus) -> ColoredString {
    match status {
        ProcessingStatus::Ok => status.as_str().green(),
        ProcessingStatus::FetchError => status.as_str().red(),
        ProcessingStatus::ParsingError => status.as_str().yellow(),
        ProcessingStatus::Timeout => status.as_str().bright_red(),
    }
}
