//! `ResumeAnalyzer` — owns the immutable catalog and exposes every scoring pass.
//!
//! Build it once at startup and share it behind an `Arc`; every method takes
//! `&self` and touches no shared mutable state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::ats::{compute_ats_score, AtsScoreResult};
use crate::analysis::jd_matcher::{match_job_description, JobDescriptionMatch};
use crate::analysis::role_matcher::{match_roles, JobMatch};
use crate::analysis::skill_gap::{analyze_skill_gap, SkillGapResult};
use crate::catalog::Catalog;
use crate::config::{AnalyzerConfig, DEFAULT_ROLE_MATCH_THRESHOLD};
use crate::errors::AnalysisError;

pub const NO_MATCHING_ROLES: &str = "No matching roles found";
pub const NO_SUITABLE_ROLE: &str = "No suitable role found";

/// Every pass over one resume, bundled for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub catalog_version: String,
    pub ats: AtsScoreResult,
    pub recommended_roles: Vec<JobMatch>,
    pub skill_gap: Option<SkillGapResult>,
    pub job_description_match: Option<JobDescriptionMatch>,
    /// Explanations for passes that found nothing.
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    catalog: Catalog,
    role_match_threshold: u32,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl ResumeAnalyzer {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            role_match_threshold: DEFAULT_ROLE_MATCH_THRESHOLD,
        }
    }

    /// Overrides the role inclusion threshold. Values above 100 are rejected.
    pub fn with_role_match_threshold(mut self, threshold: u32) -> Result<Self, AnalysisError> {
        if threshold > 100 {
            return Err(AnalysisError::Input(format!(
                "role match threshold must be between 0 and 100, got {threshold}"
            )));
        }
        self.role_match_threshold = threshold;
        Ok(self)
    }

    /// Builds the analyzer from configuration, loading the catalog file if one is set.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::default(),
        };
        let analyzer = Self::new(catalog).with_role_match_threshold(config.role_match_threshold)?;

        debug!(
            catalog_version = %analyzer.catalog.version,
            threshold = analyzer.role_match_threshold,
            "Resume analyzer initialized"
        );
        Ok(analyzer)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn role_match_threshold(&self) -> u32 {
        self.role_match_threshold
    }

    pub fn compute_ats_score(&self, text: &str) -> AtsScoreResult {
        compute_ats_score(text, &self.catalog.skills)
    }

    pub fn match_roles(&self, text: &str) -> Vec<JobMatch> {
        match_roles(text, &self.catalog.roles, self.role_match_threshold)
    }

    pub fn analyze_skill_gap(&self, text: &str) -> Option<SkillGapResult> {
        analyze_skill_gap(text, &self.catalog.roles)
    }

    pub fn match_job_description(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<JobDescriptionMatch, AnalysisError> {
        match_job_description(resume_text, job_description)
    }

    /// Runs every pass. The job-description pass only runs when one is given,
    /// and `Some("")` is rejected the same way `match_job_description` rejects it.
    pub fn analyze(
        &self,
        text: &str,
        job_description: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let job_description_match = job_description
            .map(|jd| self.match_job_description(text, jd))
            .transpose()?;

        let recommended_roles = self.match_roles(text);
        let skill_gap = self.analyze_skill_gap(text);

        let mut messages = Vec::new();
        if recommended_roles.is_empty() {
            messages.push(NO_MATCHING_ROLES.to_string());
        }
        if skill_gap.is_none() {
            messages.push(NO_SUITABLE_ROLE.to_string());
        }

        Ok(AnalysisReport {
            catalog_version: self.catalog.version.clone(),
            ats: self.compute_ats_score(text),
            recommended_roles,
            skill_gap,
            job_description_match,
            messages,
        })
    }
}
