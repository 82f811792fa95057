// Text analysis — word splitting, the charged-word dictionary and scoring.

pub mod charged;
pub mod jaundice;
pub mod tokenizer;
