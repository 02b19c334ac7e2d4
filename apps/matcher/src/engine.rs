//! Engine facade: eligibility filtering around a pluggable scorer.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::MatcherConfig;
use crate::errors::MatchError;
use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::models::matching::JobMatch;
use crate::scoring::MatchScorer;

pub struct MatchEngine {
    scorer: Arc<dyn MatchScorer>,
    config: MatcherConfig,
}

impl MatchEngine {
    pub fn new(scorer: Arc<dyn MatchScorer>, config: MatcherConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Ranks every discoverable profile against the job. HR/admin accounts
    /// and opted-out employees are filtered before scoring so they never
    /// influence the fitted vocabulary.
    pub async fn rank_candidates(
        &self,
        job: &JobPosting,
        profiles: &[EmployeeProfile],
    ) -> Result<Vec<JobMatch>, MatchError> {
        info!(
            job_id = %job.id,
            job_title = %job.title,
            backend = self.scorer.backend(),
            "starting candidate matching"
        );

        let eligible: Vec<EmployeeProfile> = profiles
            .iter()
            .filter(|p| p.is_discoverable())
            .cloned()
            .collect();
        if eligible.is_empty() {
            warn!(job_id = %job.id, "no eligible profiles for matching");
            return Ok(Vec::new());
        }
        info!(
            eligible = eligible.len(),
            excluded = profiles.len() - eligible.len(),
            "eligibility filter applied"
        );

        let matches = self.scorer.rank(job, &eligible).await?;
        info!(
            job_id = %job.id,
            matches = matches.len(),
            "candidate matching complete"
        );
        Ok(matches)
    }

    /// Scores one job/profile pair. Used by discovery views where a single
    /// candidate is inspected; no eligibility filter applies here.
    pub async fn score_candidate(
        &self,
        job: &JobPosting,
        profile: &EmployeeProfile,
    ) -> Result<JobMatch, MatchError> {
        self.scorer.score_pair(job, profile).await
    }

    /// Matches at or above the shortlist cutoff, preserving rank order.
    pub fn shortlist_candidates<'a>(&self, matches: &'a [JobMatch]) -> Vec<&'a JobMatch> {
        matches.iter().filter(|m| m.shortlisted).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Role;
    use crate::models::job::JobPosting;
    use crate::scoring::semantic::SemanticMatcher;
    use chrono::Utc;
    use uuid::Uuid;

    fn engine() -> MatchEngine {
        let config = MatcherConfig::default();
        MatchEngine::new(
            Arc::new(SemanticMatcher::new(config.clone())),
            config,
        )
    }

    fn job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: "Rust Engineer".to_string(),
            team: "Platform".to_string(),
            description: "Rust Kafka services".to_string(),
            short_description: None,
            note: None,
            required_skills: vec!["Rust".to_string()],
            optional_skills: vec![],
            min_years_experience: 0,
            preferred_certifications: vec![],
            status: Default::default(),
            priority: Default::default(),
            matching_status: Default::default(),
            manager_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn profile(name: &str, role: Role, opted_out: bool) -> EmployeeProfile {
        EmployeeProfile {
            id: Uuid::new_v4(),
            employee_id: format!("EMP-{name}"),
            email: format!("{name}@example.com"),
            name: name.to_string(),
            role,
            technical_skills: vec!["Rust".to_string(), "Kafka".to_string()],
            achievements: vec![],
            years_experience: 4,
            past_companies: vec![],
            certifications: vec![],
            education: vec![],
            publications: vec![],
            career_aspirations: None,
            location: None,
            current_job_title: None,
            preferred_roles: vec![],
            visibility_opt_out: opted_out,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_opted_out_profiles_are_never_scored() {
        let profiles = vec![
            profile("visible", Role::Employee, false),
            profile("hidden", Role::Employee, true),
        ];
        let matches = engine().rank_candidates(&job(), &profiles).await.unwrap();
        assert!(matches.iter().all(|m| m.employee_name != "hidden"));
        assert!(matches.iter().any(|m| m.employee_name == "visible"));
    }

    #[tokio::test]
    async fn test_hr_accounts_are_never_scored() {
        let profiles = vec![profile("hr-person", Role::Hr, false)];
        let matches = engine().rank_candidates(&job(), &profiles).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_empty_pool_returns_empty() {
        let matches = engine().rank_candidates(&job(), &[]).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_score_candidate_ignores_eligibility() {
        let hr = profile("hr-person", Role::Hr, false);
        let m = engine().score_candidate(&job(), &hr).await.unwrap();
        assert!(m.similarity > 0.0);
    }

    #[tokio::test]
    async fn test_shortlist_respects_flag() {
        let profiles = vec![profile("visible", Role::Employee, false)];
        let e = engine();
        let matches = e.rank_candidates(&job(), &profiles).await.unwrap();
        let shortlisted = e.shortlist_candidates(&matches);
        assert!(shortlisted
            .iter()
            .all(|m| m.score >= e.config().shortlist_cutoff));
    }
}
