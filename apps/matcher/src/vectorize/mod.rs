//! Vectorization: TF-IDF weighting, LSA reduction, cosine similarity.

pub mod lsa;
pub mod similarity;
pub mod tfidf;
