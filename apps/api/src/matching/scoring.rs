//! Score Combiner — folds similarity and coverage into one `MatchResult`.

use crate::matching::coverage::{weighted_skill_score, SkillWeights};
use crate::matching::round2;
use crate::matching::similarity::TextSimilarity;
use crate::models::report::MatchResult;

pub const SIMILARITY_WEIGHT: f64 = 0.4;
pub const COVERAGE_WEIGHT: f64 = 0.6;

/// overall = round(similarity × 0.4 + coverage × 0.6, 2)
pub fn combine_scores(similarity_pct: f64, coverage_pct: f64) -> f64 {
    round2(similarity_pct * SIMILARITY_WEIGHT + coverage_pct * COVERAGE_WEIGHT)
}

/// Scores one normalized resume against a normalized job description.
pub fn evaluate(
    similarity: &dyn TextSimilarity,
    resume_text: &str,
    jd_text: &str,
    resume_skills: &[String],
    required: &[String],
    preferred: &[String],
    weights: SkillWeights,
) -> MatchResult {
    let similarity_pct = similarity.similarity_pct(resume_text, jd_text);
    let coverage = weighted_skill_score(resume_skills, required, preferred, weights);
    let overall_pct = combine_scores(similarity_pct, coverage.coverage_pct);

    MatchResult {
        similarity_pct,
        coverage_pct: coverage.coverage_pct,
        overall_pct,
        required_matched: coverage.required_matched,
        required_missing: coverage.required_missing,
        preferred_matched: coverage.preferred_matched,
        preferred_missing: coverage.preferred_missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::similarity::TfidfCosine;

    struct FixedSimilarity(f64);

    impl TextSimilarity for FixedSimilarity {
        fn similarity_pct(&self, _left: &str, _right: &str) -> f64 {
            self.0
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_combine_scores_formula() {
        assert_eq!(combine_scores(50.0, 57.14), 54.28);
        assert_eq!(combine_scores(0.0, 0.0), 0.0);
        assert_eq!(combine_scores(100.0, 100.0), 100.0);
    }

    #[test]
    fn test_combine_scores_favors_coverage() {
        assert!(combine_scores(0.0, 80.0) > combine_scores(80.0, 0.0));
    }

    #[test]
    fn test_evaluate_uses_injected_similarity() {
        let result = evaluate(
            &FixedSimilarity(50.0),
            "python docker",
            "python sql docker",
            &names(&["docker", "python"]),
            &names(&["python", "sql"]),
            &names(&["docker"]),
            SkillWeights::default(),
        );
        assert_eq!(result.similarity_pct, 50.0);
        assert_eq!(result.coverage_pct, 57.14);
        assert_eq!(result.overall_pct, 54.28);
        assert_eq!(result.required_missing, names(&["sql"]));
    }

    #[test]
    fn test_evaluate_with_tfidf_is_bounded() {
        let result = evaluate(
            &TfidfCosine,
            "python engineer",
            "python engineer wanted",
            &names(&["python"]),
            &names(&["python"]),
            &[],
            SkillWeights::default(),
        );
        assert!((0.0..=100.0).contains(&result.overall_pct));
        assert_eq!(result.coverage_pct, 100.0);
    }
}
