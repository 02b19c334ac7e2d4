use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal role. Only employees and managers are match candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    Hr,
    Admin,
}

/// An employee profile as the portal stores it: identity plus the free-text
/// and list fields the matching engine vectorizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: Uuid,
    /// Company-internal badge code, e.g. "EMP-0042".
    pub employee_id: String,
    pub email: String,
    pub name: String,
    pub role: Role,

    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub past_companies: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub publications: Vec<String>,
    #[serde(default)]
    pub career_aspirations: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub current_job_title: Option<String>,
    #[serde(default)]
    pub preferred_roles: Vec<String>,

    /// When set, the profile is ineligible for candidate discovery.
    #[serde(default)]
    pub visibility_opt_out: bool,

    pub created_at: DateTime<Utc>,
}

impl EmployeeProfile {
    /// Eligibility filter for matching: employees and managers who have not
    /// opted out of visibility. HR and admin accounts are never candidates.
    pub fn is_discoverable(&self) -> bool {
        matches!(self.role, Role::Employee | Role::Manager) && !self.visibility_opt_out
    }
}
