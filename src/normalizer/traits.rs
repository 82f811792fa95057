// Word normalizer trait — the swap-ready abstraction.
//
// Implementations hold a large in-memory model and are shared across every
// concurrent pipeline behind an Arc, so calls must be read-only.

/// Reduces a raw token to its dictionary (normal) form.
pub trait WordNormalizer: Send + Sync {
    /// Return the lower-cased dictionary form of `word`.
    ///
    /// Never fails: unknown words come back lower-cased but otherwise as-is.
    fn normal_form(&self, word: &str) -> String;
}

/// Normalizer that only lower-cases. Useful when no lexicon is available.
pub struct LowercaseNormalizer;

impl WordNormalizer for LowercaseNormalizer {
    fn normal_form(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_normalizer_folds_case() {
        assert_eq!(LowercaseNormalizer.normal_form("Москва"), "москва");
        assert_eq!(LowercaseNormalizer.normal_form(""), "");
    }
}
