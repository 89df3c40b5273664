use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::coverage::SkillWeights;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_db_path: PathBuf,
    pub default_top_n: usize,
    pub skill_weights: SkillWeights,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SkillWeights::default();
        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skills_db_path: std::env::var("SKILLS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/skills_db.json")),
            default_top_n: env_or("DEFAULT_TOP_N", 10)?,
            skill_weights: SkillWeights {
                required: env_or("REQUIRED_SKILL_WEIGHT", defaults.required)?,
                preferred: env_or("PREFERRED_SKILL_WEIGHT", defaults.preferred)?,
            },
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 25 * 1024 * 1024)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
