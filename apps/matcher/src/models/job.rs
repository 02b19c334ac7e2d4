use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Closed,
    OnHold,
    Cancelled,
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPriority {
    Normal,
    HighImportance,
}

impl Default for JobPriority {
    fn default() -> Self {
        JobPriority::Normal
    }
}

/// Lifecycle of the matching run for a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStatus {
    NotMatched,
    Matching,
    Matched,
}

impl Default for MatchingStatus {
    fn default() -> Self {
        MatchingStatus::NotMatched
    }
}

/// A job posting. `note` is manager/HR-only free text and is excluded from
/// the vectorized content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub team: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub optional_skills: Vec<String>,
    #[serde(default)]
    pub min_years_experience: u32,
    #[serde(default)]
    pub preferred_certifications: Vec<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub priority: JobPriority,
    #[serde(default)]
    pub matching_status: MatchingStatus,
    pub manager_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults() {
        assert_eq!(JobStatus::default(), JobStatus::Open);
        assert_eq!(JobPriority::default(), JobPriority::Normal);
        assert_eq!(MatchingStatus::default(), MatchingStatus::NotMatched);
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&JobStatus::OnHold).unwrap(),
            r#""on_hold""#
        );
        assert_eq!(
            serde_json::to_string(&JobPriority::HighImportance).unwrap(),
            r#""high_importance""#
        );
        assert_eq!(
            serde_json::to_string(&MatchingStatus::NotMatched).unwrap(),
            r#""not_matched""#
        );
    }

    #[test]
    fn test_posting_deserializes_with_defaults() {
        let json = r#"{
            "id": "7f2c1a90-1111-4222-8333-444455556666",
            "title": "Senior Rust Engineer",
            "team": "Platform",
            "description": "Build the platform.",
            "manager_id": "7f2c1a90-1111-4222-8333-444455557777",
            "created_at": "2026-01-15T10:00:00Z"
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Open);
        assert!(job.required_skills.is_empty());
        assert!(job.note.is_none());
    }
}
