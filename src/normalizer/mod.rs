// Word normalization — trait-based abstraction over morphological analysis.
//
// The WordNormalizer trait is the seam: the tokenizer only ever asks for a
// normal form. LexiconNormalizer is the shipped implementation, backed by an
// in-memory form → lemma dictionary that is loaded once per process.

pub mod lexicon;
pub mod traits;
