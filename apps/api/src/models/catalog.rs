//! Skill Catalog — canonical skill names split into required/preferred tiers,
//! plus the synonym phrases that map back to each canonical name.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Catalog as it appears on disk or in a request body. Nothing is trusted yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSkillCatalog {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub preferred: Vec<String>,
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
}

/// Normalized, immutable skill catalog threaded through every scoring call.
///
/// Invariants held after construction:
/// - every canonical name is lowercase, trimmed and non-empty
/// - a canonical name appears at most once across `required` ∪ `preferred`
/// - synonym keys are lowercase and synonym lists hold no empty strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSkillCatalog")]
pub struct SkillCatalog {
    required: Vec<String>,
    preferred: Vec<String>,
    synonyms: BTreeMap<String, Vec<String>>,
}

impl SkillCatalog {
    /// Builds a catalog, resolving duplicates first-write-wins. A skill listed
    /// in both tiers stays required.
    pub fn new(
        required: Vec<String>,
        preferred: Vec<String>,
        synonyms: BTreeMap<String, Vec<String>>,
    ) -> Self {
        let mut seen = HashSet::new();
        let required = dedup_names(required, &mut seen, "required");
        let preferred = dedup_names(preferred, &mut seen, "preferred");

        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, variants) in synonyms {
            let key = normalize_name(&key);
            if key.is_empty() {
                continue;
            }
            let slot = merged.entry(key).or_default();
            for variant in variants {
                let variant = normalize_name(&variant);
                if !variant.is_empty() && !slot.contains(&variant) {
                    slot.push(variant);
                }
            }
        }
        merged.retain(|_, variants| !variants.is_empty());

        Self {
            required,
            preferred,
            synonyms: merged,
        }
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn preferred(&self) -> &[String] {
        &self.preferred
    }

    pub fn synonyms(&self) -> &BTreeMap<String, Vec<String>> {
        &self.synonyms
    }

    /// Required followed by preferred, in catalog order.
    pub fn all_skills(&self) -> Vec<String> {
        self.required
            .iter()
            .chain(self.preferred.iter())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.preferred.is_empty()
    }
}

impl From<RawSkillCatalog> for SkillCatalog {
    fn from(raw: RawSkillCatalog) -> Self {
        SkillCatalog::new(raw.required, raw.preferred, raw.synonyms)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn dedup_names(names: Vec<String>, seen: &mut HashSet<String>, tier: &str) -> Vec<String> {
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let name = normalize_name(&name);
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            out.push(name);
        } else {
            warn!("Duplicate skill '{name}' in {tier} list ignored");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_names_are_lowercased_and_trimmed() {
        let catalog = SkillCatalog::new(names(&["  Python ", "SQL"]), vec![], BTreeMap::new());
        assert_eq!(catalog.required(), &["python", "sql"]);
    }

    #[test]
    fn test_empty_names_are_dropped() {
        let catalog = SkillCatalog::new(names(&["", "  ", "rust"]), names(&[""]), BTreeMap::new());
        assert_eq!(catalog.required(), &["rust"]);
        assert!(catalog.preferred().is_empty());
    }

    #[test]
    fn test_duplicate_across_tiers_stays_required() {
        let catalog = SkillCatalog::new(
            names(&["docker", "python"]),
            names(&["Docker", "aws"]),
            BTreeMap::new(),
        );
        assert_eq!(catalog.required(), &["docker", "python"]);
        assert_eq!(catalog.preferred(), &["aws"]);
    }

    #[test]
    fn test_duplicate_within_tier_first_wins() {
        let catalog = SkillCatalog::new(names(&["go", "rust", "GO"]), vec![], BTreeMap::new());
        assert_eq!(catalog.required(), &["go", "rust"]);
    }

    #[test]
    fn test_synonyms_normalized_and_merged() {
        let mut synonyms = BTreeMap::new();
        synonyms.insert("Kubernetes".to_string(), names(&["K8s", ""]));
        synonyms.insert("kubernetes".to_string(), names(&["k8s", "kube"]));
        synonyms.insert("aws".to_string(), names(&["  "]));
        let catalog = SkillCatalog::new(vec![], names(&["kubernetes"]), synonyms);

        assert_eq!(catalog.synonyms().get("kubernetes").unwrap(), &names(&["k8s", "kube"]));
        assert!(catalog.synonyms().get("aws").is_none());
    }

    #[test]
    fn test_all_skills_required_first() {
        let catalog = SkillCatalog::new(names(&["python", "sql"]), names(&["docker"]), BTreeMap::new());
        assert_eq!(catalog.all_skills(), names(&["python", "sql", "docker"]));
    }

    #[test]
    fn test_deserialize_applies_normalization() {
        let json = r#"{
            "required": ["Python", "python"],
            "synonyms": {"Python": ["py3"]}
        }"#;
        let catalog: SkillCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.required(), &["python"]);
        assert!(catalog.preferred().is_empty());
        assert_eq!(catalog.synonyms().get("python").unwrap(), &names(&["py3"]));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: SkillCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
