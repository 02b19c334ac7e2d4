mod config;
mod content;
mod engine;
mod errors;
mod models;
mod scoring;
mod text;
mod vectorize;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::MatcherConfig;
use crate::engine::MatchEngine;
use crate::errors::MatchError;
use crate::models::employee::EmployeeProfile;
use crate::models::job::JobPosting;
use crate::models::matching::JobMatch;
use crate::scoring::keyword::KeywordMatcher;
use crate::scoring::semantic::SemanticMatcher;
use crate::scoring::MatchScorer;

/// Candidate matching engine for the internal job-mobility portal.
/// Batch replacement for the portal's per-job matching trigger.
#[derive(Parser)]
#[command(name = "matcher", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// TF-IDF + LSA + cosine similarity (default).
    Semantic,
    /// Rule-based skill/experience points.
    Keyword,
}

#[derive(Subcommand)]
enum Command {
    /// Rank all eligible profiles against one job posting.
    Rank {
        /// JSON file holding an array of job postings.
        #[arg(long)]
        jobs: PathBuf,
        /// JSON file holding an array of employee profiles.
        #[arg(long)]
        profiles: PathBuf,
        /// Job posting to match against.
        #[arg(long)]
        job_id: Uuid,
        /// Keep only the highest-ranked matches.
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[arg(long, value_enum, default_value = "semantic")]
        backend: Backend,
        /// Emit the match records as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Score a single job/profile pair.
    Score {
        #[arg(long)]
        jobs: PathBuf,
        #[arg(long)]
        profiles: PathBuf,
        #[arg(long)]
        job_id: Uuid,
        #[arg(long)]
        employee_id: Uuid,
        #[arg(long, value_enum, default_value = "semantic")]
        backend: Backend,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = MatcherConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Rank {
            jobs,
            profiles,
            job_id,
            top,
            backend,
            json,
        } => {
            let engine = build_engine(backend, config);
            let job = find_job(&load_jobs(&jobs)?, job_id)?;
            let pool = load_profiles(&profiles)?;
            let mut matches = engine.rank_candidates(&job, &pool).await?;
            matches.truncate(top);
            info!(
                shortlisted = engine.shortlist_candidates(&matches).len(),
                cutoff = engine.config().shortlist_cutoff,
                "shortlist candidates flagged"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print_ranking(&job, &matches);
            }
        }
        Command::Score {
            jobs,
            profiles,
            job_id,
            employee_id,
            backend,
            json,
        } => {
            let engine = build_engine(backend, config);
            let job = find_job(&load_jobs(&jobs)?, job_id)?;
            let pool = load_profiles(&profiles)?;
            let profile = pool
                .iter()
                .find(|p| p.id == employee_id)
                .ok_or_else(|| MatchError::NotFound(format!("employee {employee_id}")))?;
            let m = engine.score_candidate(&job, profile).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&m)?);
            } else {
                print_pair(&job, &m);
            }
        }
    }

    Ok(())
}

fn build_engine(backend: Backend, config: MatcherConfig) -> MatchEngine {
    let scorer: Arc<dyn MatchScorer> = match backend {
        Backend::Semantic => Arc::new(SemanticMatcher::new(config.clone())),
        Backend::Keyword => Arc::new(KeywordMatcher::new(config.clone())),
    };
    MatchEngine::new(scorer, config)
}

fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, MatchError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn load_profiles(path: &Path) -> Result<Vec<EmployeeProfile>, MatchError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn find_job(jobs: &[JobPosting], job_id: Uuid) -> Result<JobPosting, MatchError> {
    jobs.iter()
        .find(|j| j.id == job_id)
        .cloned()
        .ok_or_else(|| MatchError::NotFound(format!("job {job_id}")))
}

fn print_ranking(job: &JobPosting, matches: &[JobMatch]) {
    println!("Matches for \"{}\" ({})", job.title, job.team);
    if matches.is_empty() {
        println!("  no candidates cleared the similarity floor");
        return;
    }
    for (rank, m) in matches.iter().enumerate() {
        let flag = if m.shortlisted { " [shortlist]" } else { "" };
        println!(
            "  {:>2}. {:<24} {:>6.1}%{}",
            rank + 1,
            m.employee_name,
            m.score,
            flag
        );
        if !m.skills_match.is_empty() {
            println!("      skills: {}", m.skills_match.join(", "));
        }
        if !m.explanation.is_empty() {
            let terms: Vec<&str> =
                m.explanation.iter().map(|c| c.term.as_str()).collect();
            println!("      why: {}", terms.join(", "));
        }
    }
}

fn print_pair(job: &JobPosting, m: &JobMatch) {
    println!(
        "{} vs \"{}\": {:.1}% ({})",
        m.employee_name,
        job.title,
        m.score,
        match m.method {
            models::matching::MatchMethod::SemanticTfidfLsa => "semantic",
            models::matching::MatchMethod::Keyword => "keyword",
            models::matching::MatchMethod::WordOverlap => "word overlap",
        }
    );
    if !m.explanation.is_empty() {
        for c in &m.explanation {
            println!("  {:<40} {:.4}", c.term, c.weight);
        }
    }
}
