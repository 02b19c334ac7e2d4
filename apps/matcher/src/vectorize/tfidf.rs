//! TF-IDF vectorizer over a small in-memory corpus.
//!
//! Configuration mirrors what the matching model needs: word n-grams up to
//! `ngram_max`, a `max_features` vocabulary cap, sublinear (log-scaled) term
//! frequency, smoothed inverse document frequency, and L2-normalized rows so
//! downstream cosine similarity is a plain dot product.

use std::collections::HashMap;

use crate::text::preprocess::{ngrams, tokenize};

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Word n-grams from 1 up to this size. 3 captures trigram context.
    pub ngram_max: usize,
    /// Vocabulary cap; most frequent corpus-wide terms win, ties break
    /// alphabetically.
    pub max_features: usize,
    /// Log-scale term frequency: 1 + ln(tf).
    pub sublinear_tf: bool,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self {
            ngram_max: 3,
            max_features: 1000,
            sublinear_tf: true,
        }
    }
}

/// Dense document-term matrix: one L2-normalized row per input document.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// Selected terms, alphabetical; column j holds weights for vocabulary[j].
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }
}

impl TfidfVectorizer {
    /// Fits the vocabulary and IDF on `documents` and returns their weighted
    /// vectors. A document with no in-vocabulary terms gets a zero row.
    pub fn fit_transform(&self, documents: &[String]) -> TfidfMatrix {
        let doc_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let tokens = tokenize(doc);
                let mut counts = HashMap::new();
                for gram in ngrams(&tokens, self.ngram_max) {
                    *counts.entry(gram).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Corpus-wide term counts and document frequencies.
        let mut corpus_count: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                *corpus_count.entry(term).or_insert(0) += count;
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Vocabulary selection under the feature cap.
        let mut ranked: Vec<(&str, usize)> =
            corpus_count.iter().map(|(t, c)| (*t, *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> =
            ranked.iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort_unstable();
        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = doc_counts
            .iter()
            .map(|counts| {
                let mut row = vec![0.0; vocabulary.len()];
                for (term, &count) in counts {
                    if let Some(&j) = index.get(term.as_str()) {
                        let tf = if self.sublinear_tf {
                            1.0 + (count as f64).ln()
                        } else {
                            count as f64
                        };
                        row[j] = tf * idf[j];
                    }
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        TfidfMatrix { vocabulary, rows }
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
}
