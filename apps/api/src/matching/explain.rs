use crate::models::report::{Explanation, MatchResult};

pub const SCORING_NOTE: &str =
    "Required skills impact the score more than Preferred skills (weighted scoring).";

const EMPTY_PLACEHOLDER: &str = "—";

/// Renders matched/missing skill sets and detected projects into display strings.
pub fn build_explanation(result: &MatchResult, projects: &[String]) -> Explanation {
    let strong: Vec<&str> = result
        .required_matched
        .iter()
        .chain(&result.preferred_matched)
        .map(String::as_str)
        .collect();
    let missing: Vec<&str> = result
        .required_missing
        .iter()
        .chain(&result.preferred_missing)
        .map(String::as_str)
        .collect();
    let projects: Vec<&str> = projects.iter().map(String::as_str).collect();

    Explanation {
        strong_match: join_or_placeholder(&strong),
        missing_skills: join_or_placeholder(&missing),
        note: SCORING_NOTE.to_string(),
        projects_detected: join_or_placeholder(&projects),
    }
}

pub fn join_or_placeholder(items: &[&str]) -> String {
    if items.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn result(req_m: &[&str], req_x: &[&str], pref_m: &[&str], pref_x: &[&str]) -> MatchResult {
        MatchResult {
            similarity_pct: 0.0,
            coverage_pct: 0.0,
            overall_pct: 0.0,
            required_matched: names(req_m),
            required_missing: names(req_x),
            preferred_matched: names(pref_m),
            preferred_missing: names(pref_x),
        }
    }

    #[test]
    fn test_required_listed_before_preferred() {
        let exp = build_explanation(&result(&["python"], &["sql"], &["docker"], &["aws"]), &[]);
        assert_eq!(exp.strong_match, "python, docker");
        assert_eq!(exp.missing_skills, "sql, aws");
    }

    #[test]
    fn test_empty_sets_render_placeholder() {
        let exp = build_explanation(&result(&[], &[], &[], &[]), &[]);
        assert_eq!(exp.strong_match, "—");
        assert_eq!(exp.missing_skills, "—");
        assert_eq!(exp.projects_detected, "—");
        assert_eq!(exp.note, SCORING_NOTE);
    }

    #[test]
    fn test_projects_joined() {
        let exp = build_explanation(
            &result(&[], &[], &[], &[]),
            &names(&["Project: Fraud detector", "Capstone project: Chatbot"]),
        );
        assert_eq!(exp.projects_detected, "Project: Fraud detector, Capstone project: Chatbot");
    }
}
