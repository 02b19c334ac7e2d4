//! Semantic content extraction: flattens a posting or profile into the one
//! normalized document the vectorizer sees. No field labels, no manual
//! weighting; empty fields contribute nothing.

use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::text::preprocess::normalize;

fn push_text(parts: &mut Vec<String>, text: &str) {
    let cleaned = normalize(text);
    if !cleaned.is_empty() {
        parts.push(cleaned);
    }
}

fn push_list(parts: &mut Vec<String>, items: &[String]) {
    if !items.is_empty() {
        push_text(parts, &items.join(" "));
    }
}

/// Job-side document: title, descriptions, skills, and team context.
/// The private `note` field is manager/HR-only and is never vectorized.
pub fn job_document(job: &JobPosting) -> String {
    let mut parts = Vec::new();
    push_text(&mut parts, &job.title);
    push_text(&mut parts, &job.description);
    if let Some(short) = &job.short_description {
        push_text(&mut parts, short);
    }
    push_list(&mut parts, &job.required_skills);
    push_list(&mut parts, &job.optional_skills);
    push_list(&mut parts, &job.preferred_certifications);
    push_text(&mut parts, &job.team);
    parts.join(" ")
}

/// Candidate-side document: current title, aspirations, skills, education,
/// certifications, past companies, and achievements.
pub fn profile_document(profile: &EmployeeProfile) -> String {
    let mut parts = Vec::new();
    if let Some(title) = &profile.current_job_title {
        push_text(&mut parts, title);
    }
    if let Some(aspirations) = &profile.career_aspirations {
        push_text(&mut parts, aspirations);
    }
    push_list(&mut parts, &profile.technical_skills);
    push_list(&mut parts, &profile.education);
    push_list(&mut parts, &profile.certifications);
    push_list(&mut parts, &profile.past_companies);
    push_list(&mut parts, &profile.achievements);
    parts.join(" ")
}
