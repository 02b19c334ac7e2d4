//! Minimal, unbiased text preprocessing ahead of vectorization.
//!
//! Normalization keeps skill-bearing punctuation ("c++", "c#", ".net",
//! "ci/cd") and strips everything else that carries no semantic content.

use std::sync::OnceLock;

use regex::Regex;

use crate::text::stopwords::is_stopword;

/// Characters outside word chars, whitespace, and `- + # . /` are noise.
fn noise_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s\-\+#\./]").expect("static regex"))
}

/// Lowercases, strips non-semantic characters, and collapses whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = noise_re().replace_all(&lowered, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes and splits into tokens, dropping English stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| !is_stopword(t))
        .map(str::to_string)
        .collect()
}

/// Contiguous word n-grams for n in 1..=max_n, space-joined.
/// `max_n = 3` captures the trigram context the similarity model relies on.
pub fn ngrams(tokens: &[String], max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in 1..=max_n.max(1) {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Senior   Rust\tEngineer "), "senior rust engineer");
    }

    #[test]
    fn test_normalize_preserves_skill_punctuation() {
        assert_eq!(normalize("C++ and C# on .NET, CI/CD!"), "c++ and c# on .net ci/cd");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_tokenize_drops_stopwords() {
        let tokens = tokenize("experience with the Rust language and Kafka");
        assert_eq!(tokens, vec!["experience", "rust", "language", "kafka"]);
    }

    #[test]
    fn test_tokenize_pure_punctuation_is_dropped() {
        assert!(tokenize("!!! ???").is_empty());
    }

    #[test]
    fn test_ngrams_unigrams_through_trigrams() {
        let tokens: Vec<String> = ["distributed", "systems", "rust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let grams = ngrams(&tokens, 3);
        assert!(grams.contains(&"distributed".to_string()));
        assert!(grams.contains(&"distributed systems".to_string()));
        assert!(grams.contains(&"distributed systems rust".to_string()));
        assert_eq!(grams.len(), 3 + 2 + 1);
    }

    #[test]
    fn test_ngrams_short_input() {
        let tokens = vec!["rust".to_string()];
        assert_eq!(ngrams(&tokens, 3), vec!["rust".to_string()]);
    }

    #[test]
    fn test_ngrams_empty_input() {
        assert!(ngrams(&[], 3).is_empty());
    }
}
