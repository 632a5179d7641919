//! Skill Gap Analyzer — picks the single best-fit role and lists what the
//! resume is missing for it.

use serde::{Deserialize, Serialize};

use crate::catalog::RoleCatalog;
use crate::text::normalize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapResult {
    pub best_role: String,
    pub skills_present: usize,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Returns the role with the strictly highest count of matched skills.
///
/// Ties go to the role seen first, so catalog order matters. `None` when no
/// role matches a single skill (including an empty catalog).
pub fn analyze_skill_gap(text: &str, roles: &RoleCatalog) -> Option<SkillGapResult> {
    let text = normalize(text);

    let mut best: Option<SkillGapResult> = None;
    let mut highest = 0;

    for role in roles.iter() {
        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = role
            .required_skills()
            .iter()
            .cloned()
            .partition(|skill| text.contains(skill.as_str()));

        if matched_skills.len() > highest {
            highest = matched_skills.len();
            best = Some(SkillGapResult {
                best_role: role.name().to_string(),
                skills_present: matched_skills.len(),
                matched_skills,
                missing_skills,
            });
        }
    }

    best
}
