// Jaundice rate — the share of charged words in an article, as a percentage.

use super::charged::ChargedWordSet;

/// Percentage of `words` found in `charged`, rounded to two decimals.
///
/// Every occurrence counts: a charged word repeated three times adds three
/// to the numerator, and every word adds one to the denominator. An empty
/// article scores exactly 0.0.
pub fn calculate_jaundice_rate(words: &[String], charged: &ChargedWordSet) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let found = words.iter().filter(|w| charged.contains(w)).count();
    let rate = found as f64 / words.len() as f64 * 100.0;

    (rate * 100.0).round() / 100.0
}
