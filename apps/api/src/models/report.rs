use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of scoring one candidate against one job description and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub similarity_pct: f64,
    pub coverage_pct: f64,
    pub overall_pct: f64,
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub preferred_missing: Vec<String>,
}

/// Display strings explaining a candidate's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub strong_match: String,
    pub missing_skills: String,
    pub note: String,
    pub projects_detected: String,
}

/// One row of the ranking table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRow {
    pub candidate: String,
    pub overall_pct: f64,
    pub coverage_pct: f64,
    pub similarity_pct: f64,
    pub resume_years: f64,
    pub required_years: f64,
    pub experience_gap: f64,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize,
    #[serde(flatten)]
    pub row: CandidateRow,
    pub explanation: Explanation,
}

/// Ordered output of a single ranking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub required_years: f64,
    pub total_candidates: usize,
    pub candidates: Vec<RankedCandidate>,
}
