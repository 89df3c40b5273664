//! Skill Coverage Scorer — weighted share of catalog skills a candidate covers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::round2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillWeights {
    pub required: u32,
    pub preferred: u32,
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            required: 3,
            preferred: 1,
        }
    }
}

/// Matched/missing partitions plus the weighted coverage percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCoverage {
    pub coverage_pct: f64,
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub preferred_matched: Vec<String>,
    pub preferred_missing: Vec<String>,
}

/// coverage = (|req matched|·w_r + |pref matched|·w_p) / (|req|·w_r + |pref|·w_p) × 100
///
/// Zero total weight (no skills configured) yields 0.0.
pub fn weighted_skill_score(
    resume_skills: &[String],
    required: &[String],
    preferred: &[String],
    weights: SkillWeights,
) -> SkillCoverage {
    let have: BTreeSet<&str> = resume_skills.iter().map(String::as_str).collect();
    let (required_matched, required_missing) = partition(required, &have);
    let (preferred_matched, preferred_missing) = partition(preferred, &have);

    let total = required.len() as f64 * weights.required as f64
        + preferred.len() as f64 * weights.preferred as f64;

    let coverage_pct = if total > 0.0 {
        let achieved = required_matched.len() as f64 * weights.required as f64
            + preferred_matched.len() as f64 * weights.preferred as f64;
        round2((achieved / total * 100.0).clamp(0.0, 100.0))
    } else {
        0.0
    };

    SkillCoverage {
        coverage_pct,
        required_matched,
        required_missing,
        preferred_matched,
        preferred_missing,
    }
}

fn partition(skills: &[String], have: &BTreeSet<&str>) -> (Vec<String>, Vec<String>) {
    let wanted: BTreeSet<&str> = skills.iter().map(String::as_str).collect();
    let (matched, missing): (Vec<&str>, Vec<&str>) =
        wanted.into_iter().partition(|s| have.contains(s));
    (
        matched.into_iter().map(str::to_string).collect(),
        missing.into_iter().map(str::to_string).collect(),
    )
}
