//! Rule-based keyword scorer, kept as the alternate backend.
//!
//! Point schedule:
//! - exact required-skill match: +10 each
//! - related skill (substring either way): +5 each
//! - two or more years of experience: +5
//! - any certification: +3
//! - any education entry: +2
//! - required skill named in career aspirations: +2 each
//! - achievements: +2 each, capped at three
//!
//! Points are rescaled against the maximum attainable for the job so the
//! reported score stays a percentage.

use async_trait::async_trait;
use tracing::info;

use crate::config::MatcherConfig;
use crate::errors::MatchError;
use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::models::matching::{to_percentage, JobMatch, MatchMethod, TermContribution};
use crate::scoring::{sort_matches, MatchScorer};

pub struct KeywordMatcher {
    config: MatcherConfig,
}

impl KeywordMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    fn build_match(&self, job: &JobPosting, profile: &EmployeeProfile) -> JobMatch {
        let breakdown = score_profile(job, profile);
        let max = max_points(job);
        let similarity = if max > 0 {
            (breakdown.total() as f64 / max as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let score = to_percentage(similarity);
        JobMatch {
            job_id: job.id,
            employee_id: profile.id,
            employee_name: profile.name.clone(),
            score,
            similarity,
            skills_match: breakdown.exact_skills.clone(),
            explanation: breakdown.into_contributions(),
            method: MatchMethod::Keyword,
            shortlisted: score >= self.config.shortlist_cutoff,
        }
    }
}

#[async_trait]
impl MatchScorer for KeywordMatcher {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    async fn rank(
        &self,
        job: &JobPosting,
        profiles: &[EmployeeProfile],
    ) -> Result<Vec<JobMatch>, MatchError> {
        let mut matches: Vec<JobMatch> = profiles
            .iter()
            .map(|profile| self.build_match(job, profile))
            .filter(|m| m.similarity > 0.0)
            .collect();
        sort_matches(&mut matches);
        info!(job_id = %job.id, matches = matches.len(), "keyword ranking complete");
        Ok(matches)
    }

    async fn score_pair(
        &self,
        job: &JobPosting,
        profile: &EmployeeProfile,
    ) -> Result<JobMatch, MatchError> {
        Ok(self.build_match(job, profile))
    }
}

#[derive(Debug, Default)]
struct PointBreakdown {
    exact_skills: Vec<String>,
    related_pairs: Vec<(String, String)>,
    experience: u32,
    certifications: u32,
    education: u32,
    aspiration_hits: Vec<String>,
    achievements: u32,
}

impl PointBreakdown {
    fn total(&self) -> u32 {
        self.exact_skills.len() as u32 * 10
            + self.related_pairs.len() as u32 * 5
            + self.experience
            + self.certifications
            + self.education
            + self.aspiration_hits.len() as u32 * 2
            + self.achievements
    }

    fn into_contributions(self) -> Vec<TermContribution> {
        let mut out = Vec::new();
        for skill in self.exact_skills {
            out.push(TermContribution {
                term: format!("exact skill: {skill}"),
                weight: 10.0,
            });
        }
        for (job_skill, emp_skill) in self.related_pairs {
            out.push(TermContribution {
                term: format!("related skill: {job_skill} ~ {emp_skill}"),
                weight: 5.0,
            });
        }
        if self.experience > 0 {
            out.push(TermContribution {
                term: "experience: 2+ years".to_string(),
                weight: self.experience as f64,
            });
        }
        if self.certifications > 0 {
            out.push(TermContribution {
                term: "certifications".to_string(),
                weight: self.certifications as f64,
            });
        }
        if self.education > 0 {
            out.push(TermContribution {
                term: "education".to_string(),
                weight: self.education as f64,
            });
        }
        for skill in self.aspiration_hits {
            out.push(TermContribution {
                term: format!("career aspiration: {skill}"),
                weight: 2.0,
            });
        }
        if self.achievements > 0 {
            out.push(TermContribution {
                term: "achievements".to_string(),
                weight: self.achievements as f64,
            });
        }
        out
    }
}

fn score_profile(job: &JobPosting, profile: &EmployeeProfile) -> PointBreakdown {
    let mut breakdown = PointBreakdown::default();

    let employee_skills_lower: Vec<String> = profile
        .technical_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    for skill in &job.required_skills {
        if employee_skills_lower.contains(&skill.to_lowercase()) {
            breakdown.exact_skills.push(skill.clone());
        }
    }

    for job_skill in &job.required_skills {
        let job_lower = job_skill.to_lowercase();
        for (emp_skill, emp_lower) in
            profile.technical_skills.iter().zip(&employee_skills_lower)
        {
            if job_lower != *emp_lower
                && (emp_lower.contains(&job_lower) || job_lower.contains(emp_lower))
            {
                breakdown
                    .related_pairs
                    .push((job_skill.clone(), emp_skill.clone()));
            }
        }
    }

    if profile.years_experience >= 2 {
        breakdown.experience = 5;
    }
    if !profile.certifications.is_empty() {
        breakdown.certifications = 3;
    }
    if !profile.education.is_empty() {
        breakdown.education = 2;
    }

    if let Some(aspirations) = &profile.career_aspirations {
        let aspirations_lower = aspirations.to_lowercase();
        for skill in &job.required_skills {
            if aspirations_lower.contains(&skill.to_lowercase()) {
                breakdown.aspiration_hits.push(skill.clone());
            }
        }
    }

    breakdown.achievements = (profile.achievements.len().min(3) as u32) * 2;
    breakdown
}

/// Maximum attainable points for a job, used to rescale into a percentage.
/// The open-ended related-skill bonus is excluded; totals are clamped instead.
fn max_points(job: &JobPosting) -> u32 {
    let n_required = job.required_skills.len() as u32;
    n_required * 10 + 5 + 3 + 2 + n_required * 2 + 6
}
