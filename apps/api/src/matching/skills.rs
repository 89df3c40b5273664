//! Skill Extractor — maps normalized resume text onto canonical catalog skills.
//!
//! Matching rules per phrase (canonical name or synonym):
//! - multi-word phrases match by plain substring containment
//! - single tokens match only when not glued to another word character,
//!   so "go" is found in "go, rust" but never inside "going"

use std::collections::{BTreeMap, BTreeSet};

/// Returns the sorted canonical skills found in `text`.
///
/// `text` is expected to be normalized already (see `normalize_text`).
/// A skill counts as found when its canonical name or any synonym matches.
pub fn extract_skills(
    text: &str,
    skills: &[String],
    synonyms: Option<&BTreeMap<String, Vec<String>>>,
) -> Vec<String> {
    let mut found = BTreeSet::new();

    for skill in skills {
        let canonical = skill.trim().to_lowercase();
        if canonical.is_empty() || found.contains(&canonical) {
            continue;
        }

        let synonym_hit = synonyms
            .and_then(|map| map.get(&canonical))
            .map(|variants| variants.iter().any(|v| contains_skill(text, v)))
            .unwrap_or(false);

        if contains_skill(text, &canonical) || synonym_hit {
            found.insert(canonical);
        }
    }

    found.into_iter().collect()
}

/// True when `phrase` occurs in `text` under the phrase/token rule above.
pub fn contains_skill(text: &str, phrase: &str) -> bool {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return false;
    }

    if phrase.contains(' ') {
        return text.contains(&phrase);
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(&phrase) {
        let start = from + offset;
        let end = start + phrase.len();
        if is_token_boundary(text, start, end) {
            return true;
        }
        // Step one char forward so overlapping occurrences are still checked.
        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

fn is_token_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_token_respects_word_boundary() {
        assert!(!contains_skill("we are going places", "go"));
        assert!(contains_skill("backend in go and rust", "go"));
        assert!(contains_skill("go", "go"));
        assert!(!contains_skill("golang_dev", "golang"));
    }

    #[test]
    fn test_phrase_matches_as_substring() {
        assert!(contains_skill("applied machine learning daily", "machine learning"));
        assert!(contains_skill("machine learningops", "machine learning"));
        assert!(!contains_skill("machine-learning", "machine learning"));
    }

    #[test]
    fn test_token_with_symbols() {
        assert!(contains_skill("c++ and c#", "c++"));
        assert!(contains_skill("built with node.js, react", "node.js"));
        assert!(!contains_skill("c++11 only", "c++"));
    }

    #[test]
    fn test_overlapping_occurrence_is_found() {
        // First hit at 1 is glued to 'x'; the overlapping hit at 3 is clean.
        assert!(contains_skill("xa-a-a", "a-a"));
    }

    #[test]
    fn test_empty_phrase_never_matches() {
        assert!(!contains_skill("anything", ""));
        assert!(!contains_skill("anything", "   "));
    }

    #[test]
    fn test_synonym_maps_to_canonical() {
        let mut synonyms = BTreeMap::new();
        synonyms.insert("kubernetes".to_string(), names(&["k8s"]));
        let text = crate::matching::normalize::normalize_text("Deployed services on K8s");

        let found = extract_skills(&text, &names(&["kubernetes"]), Some(&synonyms));
        assert_eq!(found, names(&["kubernetes"]));
    }

    #[test]
    fn test_result_is_sorted_and_deduplicated() {
        let found = extract_skills(
            "sql, python, docker and python again",
            &names(&["sql", "python", "docker", "Python", ""]),
            None,
        );
        assert_eq!(found, names(&["docker", "python", "sql"]));
    }

    #[test]
    fn test_case_insensitive_skill_names() {
        let found = extract_skills("python and docker", &names(&["  Python ", "DOCKER"]), None);
        assert_eq!(found, names(&["docker", "python"]));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(extract_skills("", &names(&["python"]), None).is_empty());
        assert!(extract_skills("python", &[], None).is_empty());
    }
}
