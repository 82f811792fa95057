// Word splitting with a cooperative deadline.
//
// Normalizing a long article is CPU-bound, so the loop checks the elapsed
// time before every token and yields to the scheduler after it. That keeps
// sibling pipelines moving and lets a runaway article time out at word
// granularity instead of monopolizing a worker thread.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::normalizer::traits::WordNormalizer;

/// Glyphs removed anywhere inside a token before punctuation trimming.
const STRIPPED_GLYPHS: [char; 3] = ['«', '»', '…'];

/// Normal forms this short are dropped, except for the negation particle.
const MIN_WORD_CHARS: usize = 3;
const NEGATION: &str = "не";

/// Word splitting ran past its wall-clock budget. Partial output is discarded.
#[derive(Debug, Error)]
#[error("word splitting exceeded its {timeout:?} budget")]
pub struct SplitTimeout {
    pub timeout: Duration,
}

/// Split sanitized article text into normalized content words.
///
/// Tokens are split on whitespace, cleaned of quotes, ellipses and
/// surrounding punctuation, then normalized. Normal forms shorter than three
/// characters are dropped, except `не`, which carries meaning for scoring.
pub async fn split_by_words(
    normalizer: &dyn WordNormalizer,
    text: &str,
    timeout: Duration,
) -> Result<Vec<String>, SplitTimeout> {
    let started = Instant::now();
    let mut words = Vec::new();

    for token in text.split_whitespace() {
        if started.elapsed() > timeout {
            return Err(SplitTimeout { timeout });
        }

        let cleaned = clean_word(token);
        if !cleaned.is_empty() {
            let normal = normalizer.normal_form(&cleaned);
            if is_content_word(&normal) {
                words.push(normal);
            }
        }

        tokio::task::yield_now().await;
    }

    Ok(words)
}

/// Strip quote/ellipsis glyphs, then surrounding ASCII punctuation.
pub fn clean_word(token: &str) -> String {
    let without_glyphs: String = token
        .chars()
        .filter(|c| !STRIPPED_GLYPHS.contains(c))
        .collect();
    without_glyphs
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

fn is_content_word(normal: &str) -> bool {
    normal.chars().count() >= MIN_WORD_CHARS || normal == NEGATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::lexicon::LexiconNormalizer;
    use crate::normalizer::traits::LowercaseNormalizer;

    const GENEROUS: Duration = Duration::from_secs(30);

    fn lexicon() -> LexiconNormalizer {
        LexiconNormalizer::from_pairs([
            ("хочет", "хотеть"),
            ("стало", "стать"),
            ("началом", "начало"),
        ])
    }

    #[test]
    fn clean_word_strips_glyphs_and_punctuation() {
        assert_eq!(clean_word("«Удивительно,"), "Удивительно");
        assert_eq!(clean_word("началом!»"), "началом");
        assert_eq!(clean_word("так…"), "так");
        assert_eq!(clean_word("Во-первых,"), "Во-первых");
        assert_eq!(clean_word("—"), "—");
        assert_eq!(clean_word("..."), "");
    }

    #[tokio::test]
    async fn splits_and_normalizes() {
        let words = split_by_words(&lexicon(), "Во-первых, он хочет, чтобы", GENEROUS)
            .await
            .unwrap();
        assert_eq!(words, vec!["во-первых", "хотеть", "чтобы"]);
    }

    #[tokio::test]
    async fn strips_guillemets_and_drops_short_words() {
        let words = split_by_words(
            &lexicon(),
            "«Удивительно, но это стало началом!»",
            GENEROUS,
        )
        .await
        .unwrap();
        assert_eq!(words, vec!["удивительно", "это", "стать", "начало"]);
    }

    #[tokio::test]
    async fn negation_particle_is_kept() {
        let words = split_by_words(&LowercaseNormalizer, "Он не пришёл", GENEROUS)
            .await
            .unwrap();
        assert_eq!(words, vec!["не", "пришёл"]);
    }

    #[tokio::test]
    async fn empty_text_yields_no_words() {
        let words = split_by_words(&LowercaseNormalizer, "", GENEROUS)
            .await
            .unwrap();
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn punctuation_only_tokens_are_dropped() {
        let words = split_by_words(&LowercaseNormalizer, "... !!! «» слово", GENEROUS)
            .await
            .unwrap();
        assert_eq!(words, vec!["слово"]);
    }

    #[tokio::test]
    async fn long_text_times_out() {
        let text = "Во-первых, он хочет, чтобы, «Удивительно, но это стало началом!» "
            .repeat(10_000);
        let err = split_by_words(&lexicon(), &text, Duration::from_nanos(1))
            .await
            .unwrap_err();
        assert_eq!(err.timeout, Duration::from_nanos(1));
    }
}
