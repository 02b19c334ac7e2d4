//! Text pipeline: normalization, tokenization, stop-word removal, n-grams.

pub mod preprocess;
pub mod stopwords;
