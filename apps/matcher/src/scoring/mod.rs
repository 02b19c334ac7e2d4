//! Scoring backends — pluggable, trait-based scorers that rank employee
//! profiles against a job posting.
//!
//! Default: `SemanticMatcher` (TF-IDF + LSA + cosine, no manual rules).
//! Alternate: `KeywordMatcher` (rule-based skill/experience points).
//!
//! The engine holds an `Arc<dyn MatchScorer>`, swapped at startup.

pub mod keyword;
pub mod semantic;

use async_trait::async_trait;

use crate::errors::MatchError;
use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::models::matching::JobMatch;

/// The scorer trait. Implement this to swap backends without touching the
/// engine or its callers.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    /// Name reported in logs and match records.
    fn backend(&self) -> &'static str;

    /// Scores every profile against the job and returns matches sorted by
    /// similarity descending (ties broken by employee id). Profiles that do
    /// not clear the backend's floor are dropped.
    async fn rank(
        &self,
        job: &JobPosting,
        profiles: &[EmployeeProfile],
    ) -> Result<Vec<JobMatch>, MatchError>;

    /// Scores a single job/profile pair without a surrounding corpus.
    async fn score_pair(
        &self,
        job: &JobPosting,
        profile: &EmployeeProfile,
    ) -> Result<JobMatch, MatchError>;
}

/// Descending by similarity, then ascending by employee id so that equal
/// scores rank deterministically.
pub(crate) fn sort_matches(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matching::MatchMethod;
    use uuid::Uuid;

    fn match_with(similarity: f64, employee_id: Uuid) -> JobMatch {
        JobMatch {
            job_id: Uuid::nil(),
            employee_id,
            employee_name: String::new(),
            score: similarity * 100.0,
            similarity,
            skills_match: vec![],
            explanation: vec![],
            method: MatchMethod::SemanticTfidfLsa,
            shortlisted: false,
        }
    }

    #[test]
    fn test_sort_is_descending_by_similarity() {
        let mut matches = vec![
            match_with(0.2, Uuid::nil()),
            match_with(0.9, Uuid::nil()),
            match_with(0.5, Uuid::nil()),
        ];
        sort_matches(&mut matches);
        assert_eq!(matches[0].similarity, 0.9);
        assert_eq!(matches[2].similarity, 0.2);
    }

    #[test]
    fn test_ties_break_by_employee_id() {
        let low = Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap();
        let high = Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap();
        let mut matches = vec![match_with(0.5, high), match_with(0.5, low)];
        sort_matches(&mut matches);
        assert_eq!(matches[0].employee_id, low);
    }
}
