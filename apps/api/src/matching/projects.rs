//! Project Detector — picks likely project titles out of raw resume lines.
//!
//! Works on the raw text, not the normalized one, because line breaks carry
//! the signal here.

pub const MAX_PROJECTS: usize = 5;

const MIN_TITLE_CHARS: usize = 6;
const MAX_TITLE_CHARS: usize = 80;

/// Lines mentioning "project" become titles once leading bullets are stripped.
pub fn extract_projects(text: &str, max_projects: usize) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut projects: Vec<String> = Vec::new();

    for line in &lines {
        if !line.to_lowercase().contains("project") {
            continue;
        }

        let title = line
            .trim_start_matches(|c: char| matches!(c, '-' | '*' | '•') || c.is_whitespace())
            .trim();
        let len = title.chars().count();
        if (MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&len) && !projects.iter().any(|p| p == title) {
            projects.push(title.to_string());
        }
    }

    projects.truncate(max_projects);
    projects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_project_lines_and_strips_bullets() {
        let text = "Experience\n- Project: Fraud detection pipeline\n* Side project — CLI budget tool\nSkills";
        assert_eq!(
            extract_projects(text, MAX_PROJECTS),
            vec![
                "Project: Fraud detection pipeline".to_string(),
                "Side project — CLI budget tool".to_string()
            ]
        );
    }

    #[test]
    fn test_skips_titles_out_of_length_range() {
        let long = format!("project {}", "x".repeat(100));
        assert!(extract_projects(&long, MAX_PROJECTS).is_empty());
        assert!(extract_projects("- proj", MAX_PROJECTS).is_empty());
    }

    #[test]
    fn test_deduplicates_and_limits() {
        let text = "project alpha\nproject alpha\nproject beta\nproject gamma";
        assert_eq!(extract_projects(text, 2), vec!["project alpha", "project beta"]);
    }

    #[test]
    fn test_no_projects() {
        assert!(extract_projects("", MAX_PROJECTS).is_empty());
        assert!(extract_projects("python developer\n5 years", MAX_PROJECTS).is_empty());
    }
}
