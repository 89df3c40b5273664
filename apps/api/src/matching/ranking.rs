//! Ranking Orchestrator — scores every candidate against one job description
//! and returns them ordered best-first.
//!
//! Each candidate is evaluated in its own blocking task on a `JoinSet`. Tasks
//! share only read-only `Arc`s, and the join is the single barrier before the
//! deterministic sort, so completion order never leaks into the output.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info};
use uuid::Uuid;

use crate::matching::coverage::SkillWeights;
use crate::matching::experience::{required_years, resume_years};
use crate::matching::explain::build_explanation;
use crate::matching::normalize::normalize_text;
use crate::matching::projects::{extract_projects, MAX_PROJECTS};
use crate::matching::round2;
use crate::matching::scoring::evaluate;
use crate::matching::similarity::TextSimilarity;
use crate::matching::skills::extract_skills;
use crate::models::candidate::{CandidateDocument, CandidateProfile, JobRequirement};
use crate::models::catalog::SkillCatalog;
use crate::models::report::{CandidateRow, RankedCandidate, RankedReport};

#[derive(Debug, Error)]
pub enum RankError {
    #[error("job description cannot be empty")]
    EmptyJobDescription,

    #[error("at least one candidate resume is required")]
    NoCandidates,

    #[error("resume text for candidate '{0}' is empty")]
    EmptyResumeText(String),

    #[error("top_n must be a positive integer")]
    InvalidTopN,

    #[error("candidate evaluation task failed: {0}")]
    Task(#[from] JoinError),
}

impl RankError {
    /// True for caller-input problems, as opposed to runtime failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, RankError::Task(_))
    }
}

/// Inputs for one ranking run.
#[derive(Debug, Clone)]
pub struct RankingRequest {
    pub job_description: String,
    pub candidates: Vec<CandidateDocument>,
    pub top_n: usize,
}

/// Shared, read-only collaborators for a ranking run.
#[derive(Clone)]
pub struct RankingEngine {
    pub catalog: Arc<SkillCatalog>,
    pub similarity: Arc<dyn TextSimilarity>,
    pub weights: SkillWeights,
}

impl JobRequirement {
    pub fn from_text(raw: &str) -> Self {
        let normalized_text = normalize_text(raw);
        let required_years = required_years(&normalized_text);
        Self {
            normalized_text,
            required_years,
        }
    }
}

impl CandidateProfile {
    /// Derives skills, experience and projects from one resume. Projects are
    /// read from the raw text since they depend on line breaks.
    pub fn build(document: &CandidateDocument, catalog: &SkillCatalog) -> Self {
        let normalized_text = normalize_text(&document.text);
        let skills = extract_skills(
            &normalized_text,
            &catalog.all_skills(),
            Some(catalog.synonyms()),
        );
        let years_experience = resume_years(&normalized_text);
        let projects = extract_projects(&document.text, MAX_PROJECTS);

        Self {
            name: document.name.clone(),
            normalized_text,
            skills,
            years_experience,
            projects,
        }
    }
}

impl RankingEngine {
    pub fn new(
        catalog: Arc<SkillCatalog>,
        similarity: Arc<dyn TextSimilarity>,
        weights: SkillWeights,
    ) -> Self {
        Self {
            catalog,
            similarity,
            weights,
        }
    }

    /// Scores a single candidate. Pure and synchronous.
    pub fn evaluate_candidate(
        &self,
        document: &CandidateDocument,
        job: &JobRequirement,
    ) -> RankedCandidate {
        let profile = CandidateProfile::build(document, &self.catalog);
        let result = evaluate(
            self.similarity.as_ref(),
            &profile.normalized_text,
            &job.normalized_text,
            &profile.skills,
            self.catalog.required(),
            self.catalog.preferred(),
            self.weights,
        );
        let experience_gap = round2((job.required_years - profile.years_experience).max(0.0));
        let explanation = build_explanation(&result, &profile.projects);

        debug!(
            candidate = %profile.name,
            overall = result.overall_pct,
            coverage = result.coverage_pct,
            similarity = result.similarity_pct,
            "Candidate scored"
        );

        RankedCandidate {
            rank: 0,
            row: CandidateRow {
                candidate: profile.name,
                overall_pct: result.overall_pct,
                coverage_pct: result.coverage_pct,
                similarity_pct: result.similarity_pct,
                resume_years: profile.years_experience,
                required_years: job.required_years,
                experience_gap,
                missing_required: result.required_missing,
                missing_preferred: result.preferred_missing,
            },
            explanation,
        }
    }

    /// Validates the request, evaluates every candidate concurrently, then
    /// sorts by (overall, coverage, similarity) descending and keeps the top N.
    /// Exact ties keep upload order.
    pub async fn rank(&self, request: RankingRequest) -> Result<RankedReport, RankError> {
        validate_request(&request)?;

        let run_id = Uuid::new_v4();
        let job = Arc::new(JobRequirement::from_text(&request.job_description));
        let total_candidates = request.candidates.len();

        info!(
            %run_id,
            candidates = total_candidates,
            required_years = job.required_years,
            backend = self.similarity.backend(),
            "Ranking run started"
        );

        let mut tasks = JoinSet::new();
        for (position, document) in request.candidates.into_iter().enumerate() {
            let engine = self.clone();
            let job = Arc::clone(&job);
            tasks.spawn_blocking(move || (position, engine.evaluate_candidate(&document, &job)));
        }

        let mut scored = Vec::with_capacity(total_candidates);
        while let Some(joined) = tasks.join_next().await {
            scored.push(joined?);
        }

        scored.sort_by_key(|(position, _)| *position);
        let mut candidates: Vec<RankedCandidate> =
            scored.into_iter().map(|(_, candidate)| candidate).collect();
        sort_ranked(&mut candidates);
        candidates.truncate(request.top_n);
        for (i, candidate) in candidates.iter_mut().enumerate() {
            candidate.rank = i + 1;
        }

        info!(%run_id, returned = candidates.len(), "Ranking run finished");

        Ok(RankedReport {
            run_id,
            generated_at: Utc::now(),
            required_years: job.required_years,
            total_candidates,
            candidates,
        })
    }
}

fn validate_request(request: &RankingRequest) -> Result<(), RankError> {
    if request.job_description.trim().is_empty() {
        return Err(RankError::EmptyJobDescription);
    }
    if request.candidates.is_empty() {
        return Err(RankError::NoCandidates);
    }
    if let Some(empty) = request.candidates.iter().find(|c| c.text.trim().is_empty()) {
        return Err(RankError::EmptyResumeText(empty.name.clone()));
    }
    if request.top_n == 0 {
        return Err(RankError::InvalidTopN);
    }
    Ok(())
}

/// Stable sort, best first.
pub fn sort_ranked(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| compare_rows(&b.row, &a.row));
}

fn compare_rows(a: &CandidateRow, b: &CandidateRow) -> Ordering {
    a.overall_pct
        .total_cmp(&b.overall_pct)
        .then(a.coverage_pct.total_cmp(&b.coverage_pct))
        .then(a.similarity_pct.total_cmp(&b.similarity_pct))
}
