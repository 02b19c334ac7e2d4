//! Semantic matching: TF-IDF vectorization, LSA reduction, cosine similarity.
//! No manual rules; the score is the geometry of the shared vocabulary.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::MatcherConfig;
use crate::content::{job_document, profile_document};
use crate::errors::MatchError;
use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::models::matching::{to_percentage, JobMatch, MatchMethod, TermContribution};
use crate::scoring::{sort_matches, MatchScorer};
use crate::text::preprocess::{normalize, tokenize};
use crate::vectorize::lsa;
use crate::vectorize::similarity::cosine;
use crate::vectorize::tfidf::{TfidfMatrix, TfidfVectorizer};

pub struct SemanticMatcher {
    config: MatcherConfig,
}

impl SemanticMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    fn vectorizer(&self, max_features: usize) -> TfidfVectorizer {
        TfidfVectorizer {
            ngram_max: self.config.ngram_max,
            max_features,
            sublinear_tf: true,
        }
    }

    /// Document vectors to compare: the LSA projection when at least two
    /// features exist, raw TF-IDF rows otherwise.
    fn comparison_space(&self, matrix: &TfidfMatrix, n_components: usize) -> Vec<Vec<f64>> {
        if matrix.n_features() >= 2 {
            let coords = lsa::project(matrix, n_components);
            debug!(
                latent_dims = coords.first().map(|c| c.len()).unwrap_or(0),
                "projected corpus into latent space"
            );
            coords
        } else {
            matrix.rows.clone()
        }
    }

    fn build_match(
        &self,
        job: &JobPosting,
        profile: &EmployeeProfile,
        profile_doc: &str,
        similarity: f64,
        matrix: &TfidfMatrix,
        job_row: usize,
        profile_row: usize,
        method: MatchMethod,
    ) -> JobMatch {
        let score = to_percentage(similarity);
        JobMatch {
            job_id: job.id,
            employee_id: profile.id,
            employee_name: profile.name.clone(),
            score,
            similarity: similarity.clamp(0.0, 1.0),
            skills_match: matched_skills(&job.required_skills, profile_doc),
            explanation: term_contributions(
                matrix,
                job_row,
                profile_row,
                self.config.explanation_terms,
            ),
            method,
            shortlisted: score >= self.config.shortlist_cutoff,
        }
    }
}

#[async_trait]
impl MatchScorer for SemanticMatcher {
    fn backend(&self) -> &'static str {
        "semantic_tfidf_lsa"
    }

    async fn rank(
        &self,
        job: &JobPosting,
        profiles: &[EmployeeProfile],
    ) -> Result<Vec<JobMatch>, MatchError> {
        let job_doc = job_document(job);
        if tokenize(&job_doc).is_empty() {
            warn!(job_id = %job.id, "job document is empty, nothing to vectorize");
            return Ok(Vec::new());
        }
        if profiles.is_empty() {
            return Ok(Vec::new());
        }

        let mut corpus = Vec::with_capacity(profiles.len() + 1);
        corpus.push(job_doc);
        let profile_docs: Vec<String> = profiles.iter().map(profile_document).collect();
        corpus.extend(profile_docs.iter().cloned());

        let matrix = self.vectorizer(self.config.max_features).fit_transform(&corpus);
        info!(
            job_id = %job.id,
            candidates = profiles.len(),
            features = matrix.n_features(),
            "vectorized matching corpus"
        );

        let space = self.comparison_space(&matrix, self.config.lsa_components);
        let mut matches = Vec::new();
        for (i, profile) in profiles.iter().enumerate() {
            // Latent coordinates can dip below zero from rounding; treat
            // anything negative as no similarity.
            let similarity = cosine(&space[0], &space[i + 1]).clamp(0.0, 1.0);
            if similarity < self.config.min_similarity {
                continue;
            }
            matches.push(self.build_match(
                job,
                profile,
                &profile_docs[i],
                similarity,
                &matrix,
                0,
                i + 1,
                MatchMethod::SemanticTfidfLsa,
            ));
        }

        sort_matches(&mut matches);
        info!(job_id = %job.id, matches = matches.len(), "semantic ranking complete");
        Ok(matches)
    }

    async fn score_pair(
        &self,
        job: &JobPosting,
        profile: &EmployeeProfile,
    ) -> Result<JobMatch, MatchError> {
        let job_doc = job_document(job);
        let profile_doc = profile_document(profile);
        let corpus = vec![job_doc.clone(), profile_doc.clone()];

        let matrix = self
            .vectorizer(self.config.pair_max_features)
            .fit_transform(&corpus);

        if matrix.n_features() == 0 {
            // Nothing survived preprocessing; fall back to raw token overlap.
            let similarity = word_overlap(&job_doc, &profile_doc);
            let mut m = self.build_match(
                job,
                profile,
                &profile_doc,
                similarity,
                &matrix,
                0,
                1,
                MatchMethod::WordOverlap,
            );
            m.explanation.clear();
            return Ok(m);
        }

        let space = self.comparison_space(&matrix, self.config.pair_lsa_components);
        let similarity = cosine(&space[0], &space[1]).clamp(0.0, 1.0);
        Ok(self.build_match(
            job,
            profile,
            &profile_doc,
            similarity,
            &matrix,
            0,
            1,
            MatchMethod::SemanticTfidfLsa,
        ))
    }
}

/// Required skills whose normalized form appears in the candidate document.
fn matched_skills(required_skills: &[String], profile_doc: &str) -> Vec<String> {
    required_skills
        .iter()
        .filter(|skill| {
            let needle = normalize(skill);
            !needle.is_empty() && profile_doc.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Top shared TF-IDF terms by the product of job-side and candidate-side
/// weights. Only terms present on both sides contribute.
fn term_contributions(
    matrix: &TfidfMatrix,
    job_row: usize,
    profile_row: usize,
    limit: usize,
) -> Vec<TermContribution> {
    let (Some(job_vec), Some(profile_vec)) =
        (matrix.rows.get(job_row), matrix.rows.get(profile_row))
    else {
        return Vec::new();
    };

    let mut contributions: Vec<TermContribution> = matrix
        .vocabulary
        .iter()
        .enumerate()
        .filter_map(|(j, term)| {
            let weight = job_vec[j] * profile_vec[j];
            (weight > 0.0).then(|| TermContribution {
                term: term.clone(),
                weight,
            })
        })
        .collect();
    contributions.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
    contributions.truncate(limit);
    contributions
}

/// Fraction of the job's distinct tokens that also appear in the profile.
/// 0.0 when the job side has no tokens.
fn word_overlap(job_doc: &str, profile_doc: &str) -> f64 {
    let job_words: std::collections::HashSet<&str> = job_doc.split_whitespace().collect();
    if job_words.is_empty() {
        return 0.0;
    }
    let profile_words: std::collections::HashSet<&str> =
        profile_doc.split_whitespace().collect();
    job_words.intersection(&profile_words).count() as f64 / job_words.len() as f64
}
