//! Resume scoring and matching engine.
//!
//! Given plain resume text (extraction from PDF/DOCX happens upstream) and an
//! optional job description, computes an ATS-style score, ranked role
//! matches, a skill-gap report and a job-description keyword match.

pub mod analysis;
pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod text;

pub use analysis::ats::{AtsScoreResult, ScoreBreakdown};
pub use analysis::jd_matcher::JobDescriptionMatch;
pub use analysis::role_matcher::JobMatch;
pub use analysis::skill_gap::SkillGapResult;
pub use analyzer::{AnalysisReport, ResumeAnalyzer};
pub use catalog::{Catalog, RoleCatalog, RoleDefinition, SkillCatalog};
pub use config::AnalyzerConfig;
pub use errors::AnalysisError;
