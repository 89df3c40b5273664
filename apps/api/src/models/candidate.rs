use serde::{Deserialize, Serialize};

/// Raw resume text for one candidate, as supplied by the caller or the PDF adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub name: String,
    pub text: String,
}

/// Everything derived from a single resume for one ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub normalized_text: String,
    pub skills: Vec<String>,
    pub years_experience: f64,
    pub projects: Vec<String>,
}

/// Derived view of the job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub normalized_text: String,
    pub required_years: f64,
}
