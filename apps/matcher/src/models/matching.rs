use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which backend produced a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// TF-IDF vectorization + LSA reduction + cosine similarity.
    SemanticTfidfLsa,
    /// Rule-based skill/experience point scoring.
    Keyword,
    /// Plain token-overlap ratio; fallback when vectorization yields nothing.
    WordOverlap,
}

/// One term's contribution to a semantic match, for explainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermContribution {
    pub term: String,
    /// Product of the job-side and candidate-side TF-IDF weights.
    pub weight: f64,
}

/// A scored candidate for one job posting, ready to rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    /// Display score: percentage in [0, 100], one decimal place.
    pub score: f64,
    /// Raw similarity in [0, 1] (or raw points for the keyword backend,
    /// rescaled into [0, 1] by the maximum attainable score).
    pub similarity: f64,
    /// Required skills found verbatim in the candidate's profile content.
    pub skills_match: Vec<String>,
    /// Top contributing terms, highest weight first.
    pub explanation: Vec<TermContribution>,
    pub method: MatchMethod,
    /// Set when the score clears the shortlist cutoff; curation happens
    /// elsewhere, the engine only flags.
    pub shortlisted: bool,
}

/// Rounds a raw [0, 1] similarity to a percentage with one decimal place.
pub fn to_percentage(similarity: f64) -> f64 {
    (similarity.clamp(0.0, 1.0) * 1000.0).round() / 10.0
}
