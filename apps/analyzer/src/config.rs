use std::path::PathBuf;

use anyhow::{bail, Context, Result};

pub const DEFAULT_ROLE_MATCH_THRESHOLD: u32 = 40;

/// Analyzer configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Minimum match percentage for a role to be recommended.
    pub role_match_threshold: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            role_match_threshold: DEFAULT_ROLE_MATCH_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup("RESUME_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let role_match_threshold = match lookup("ROLE_MATCH_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("ROLE_MATCH_THRESHOLD must be a whole number")?,
            None => DEFAULT_ROLE_MATCH_THRESHOLD,
        };
        if role_match_threshold > 100 {
            bail!("ROLE_MATCH_THRESHOLD must be between 0 and 100, got {role_match_threshold}");
        }

        Ok(AnalyzerConfig {
            catalog_path,
            role_match_threshold,
        })
    }
}
