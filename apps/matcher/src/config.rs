use anyhow::{Context, Result};

/// Matching engine configuration loaded from environment variables.
/// Every knob has a default tuned for the portal's corpus sizes.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Candidates below this raw cosine similarity are dropped.
    pub min_similarity: f64,
    /// Vocabulary cap for batch ranking.
    pub max_features: usize,
    /// Word n-grams from 1 up to this size.
    pub ngram_max: usize,
    /// Requested LSA dimensions for batch ranking (capped by corpus size).
    pub lsa_components: usize,
    /// Smaller vocabulary cap for single-pair scoring.
    pub pair_max_features: usize,
    /// Requested LSA dimensions for single-pair scoring.
    pub pair_lsa_components: usize,
    /// Display-score percentage at or above which a match is flagged as a
    /// shortlist candidate.
    pub shortlist_cutoff: f64,
    /// How many explanation terms to keep per match.
    pub explanation_terms: usize,
    pub rust_log: String,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_similarity: 0.05,
            max_features: 1000,
            ngram_max: 3,
            lsa_components: 100,
            pair_max_features: 500,
            pair_lsa_components: 50,
            shortlist_cutoff: 50.0,
            explanation_terms: 5,
            rust_log: "info".to_string(),
        }
    }
}

impl MatcherConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Self::default();
        Ok(Self {
            min_similarity: env_parse("MATCH_MIN_SIMILARITY", defaults.min_similarity)?,
            max_features: env_parse("MATCH_MAX_FEATURES", defaults.max_features)?,
            ngram_max: env_parse("MATCH_NGRAM_MAX", defaults.ngram_max)?,
            lsa_components: env_parse("MATCH_LSA_COMPONENTS", defaults.lsa_components)?,
            pair_max_features: env_parse(
                "MATCH_PAIR_MAX_FEATURES",
                defaults.pair_max_features,
            )?,
            pair_lsa_components: env_parse(
                "MATCH_PAIR_LSA_COMPONENTS",
                defaults.pair_lsa_components,
            )?,
            shortlist_cutoff: env_parse("MATCH_SHORTLIST_CUTOFF", defaults.shortlist_cutoff)?,
            explanation_terms: env_parse(
                "MATCH_EXPLANATION_TERMS",
                defaults.explanation_terms,
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("'{key}' must be a valid value, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_model_configuration() {
        let config = MatcherConfig::default();
        assert_eq!(config.min_similarity, 0.05);
        assert_eq!(config.max_features, 1000);
        assert_eq!(config.ngram_max, 3);
        assert_eq!(config.lsa_components, 100);
        assert_eq!(config.pair_max_features, 500);
        assert_eq!(config.pair_lsa_components, 50);
    }

    #[test]
    fn test_env_parse_uses_default_when_unset() {
        let value: f64 = env_parse("MATCH_TEST_UNSET_KEY", 0.25).unwrap();
        assert_eq!(value, 0.25);
    }
}
