// Lexicon-backed word normalizer.
//
// Loads a tab-separated `form<TAB>lemma` dictionary (e.g. exported from
// OpenCorpora) into a HashMap. A full Russian lexicon is several million
// entries, so build one LexiconNormalizer at startup and share it.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::traits::WordNormalizer;

/// Dictionary-based normalizer: exact lookup of the lower-cased word form.
#[derive(Debug, Default)]
pub struct LexiconNormalizer {
    lemmas: HashMap<String, String>,
}

impl LexiconNormalizer {
    /// Build a normalizer from in-memory `(form, lemma)` pairs.
    ///
    /// When a form appears more than once the first lemma wins, so a lexicon
    /// sorted by frequency resolves homonyms to the most common reading.
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: AsRef<str>,
    {
        let mut lemmas = HashMap::new();
        for (form, lemma) in pairs {
            lemmas
                .entry(fold(form.as_ref()))
                .or_insert_with(|| lemma.as_ref().to_lowercase());
        }
        Self { lemmas }
    }

    /// Load a lexicon file.
    ///
    /// Blank lines and lines starting with `#` are ignored. Lines without a
    /// tab are skipped with a warning rather than failing the whole load.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
        let normalizer = Self::parse(&contents);
        info!(
            path = %path.display(),
            entries = normalizer.len(),
            "Loaded lexicon"
        );
        Ok(normalizer)
    }

    fn parse(contents: &str) -> Self {
        let mut pairs = Vec::new();
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('\t') {
                Some((form, lemma)) if !form.trim().is_empty() && !lemma.trim().is_empty() => {
                    pairs.push((form.trim().to_string(), lemma.trim().to_string()));
                }
                _ => warn!(line = lineno + 1, "Skipping malformed lexicon line"),
            }
        }
        Self::from_pairs(pairs)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl WordNormalizer for LexiconNormalizer {
    fn normal_form(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        match self.lemmas.get(&fold(&lower)) {
            Some(lemma) => lemma.clone(),
            None => lower,
        }
    }
}

/// Lookup key: lower-cased with ё folded to е (dictionaries disagree on it).
fn fold(word: &str) -> String {
    word.to_lowercase().replace('ё', "е")
}
