use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::catalog::SkillCatalog;

/// Reads the JSON skills catalog from disk and normalizes it.
pub fn load_skill_catalog(path: &Path) -> Result<SkillCatalog> {
    info!("Loading skills catalog from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skills catalog at {}", path.display()))?;
    let catalog: SkillCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("Skills catalog at {} is not valid JSON", path.display()))?;

    if catalog.is_empty() {
        warn!("Skills catalog is empty; every candidate will score 0% coverage");
    }
    info!(
        "Skills catalog loaded: {} required, {} preferred, {} synonym groups",
        catalog.required().len(),
        catalog.preferred().len(),
        catalog.synonyms().len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_and_normalizes_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"required": ["Python", "SQL"], "preferred": ["python", "Docker"], "synonyms": {{"SQL": ["postgresql"]}}}}"#
        )
        .unwrap();

        let catalog = load_skill_catalog(file.path()).unwrap();
        assert_eq!(catalog.required(), &["python", "sql"]);
        assert_eq!(catalog.preferred(), &["docker"]);
        assert_eq!(catalog.synonyms()["sql"], vec!["postgresql".to_string()]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_skill_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read skills catalog"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_skill_catalog(file.path()).is_err());
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/skills_db.json");
        let catalog = load_skill_catalog(&path).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.synonyms().contains_key("kubernetes"));
    }
}
