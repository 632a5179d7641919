//! ATS Score — additive point budget over skills, sections, contact info,
//! length and action verbs.
//!
//! Each component is capped independently, then the total is clamped to 100:
//!
//! | component    | points                                        |
//! |--------------|-----------------------------------------------|
//! | skills       | 5 per distinct catalog skill, max 30          |
//! | sections     | 6 per section keyword found                   |
//! | contact      | 8 for an email, 7 for a 10-digit phone number |
//! | length       | 10 for 400–1200 words, 5 for 250–399          |
//! | action verbs | 10 if any is present                          |

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::text::{keywords_present, normalize, word_count};

pub const SECTION_KEYWORDS: &[&str] = &["education", "experience", "skills", "projects"];
pub const ACTION_VERBS: &[&str] = &["developed", "built", "designed", "implemented", "created"];

const POINTS_PER_SKILL: u32 = 5;
const MAX_SKILL_POINTS: u32 = 30;
const POINTS_PER_SECTION: u32 = 6;
const EMAIL_POINTS: u32 = 8;
const PHONE_POINTS: u32 = 7;
const ACTION_VERB_POINTS: u32 = 10;
const MAX_SCORE: u32 = 100;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").expect("email pattern is valid")
});
// \d is Unicode-aware: any script's decimal digits count.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("phone pattern is valid"));

/// Points awarded per component, before the final clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub sections: u32,
    pub contact: u32,
    pub length: u32,
    pub action_verbs: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.skills + self.sections + self.contact + self.length + self.action_verbs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub score: u32, // 0 – 100
    pub skills_found: Vec<String>,
    pub sections_found: Vec<String>,
    pub word_count: usize,
    pub has_email: bool,
    pub has_phone: bool,
    pub breakdown: ScoreBreakdown,
}

impl AtsScoreResult {
    pub fn has_contact_info(&self) -> bool {
        self.has_email || self.has_phone
    }
}

/// Scores resume text against the skill catalog. Empty text scores 0.
pub fn compute_ats_score(text: &str, skills: &SkillCatalog) -> AtsScoreResult {
    let text = normalize(text);

    let skills_found = keywords_present(&text, skills.iter());
    let sections_found = keywords_present(&text, SECTION_KEYWORDS.iter().copied());
    let has_email = EMAIL.is_match(&text);
    let has_phone = PHONE.is_match(&text);
    let word_count = word_count(&text);
    let has_action_verb = ACTION_VERBS.iter().any(|verb| text.contains(verb));

    let breakdown = ScoreBreakdown {
        skills: (skills_found.len() as u32 * POINTS_PER_SKILL).min(MAX_SKILL_POINTS),
        sections: sections_found.len() as u32 * POINTS_PER_SECTION,
        contact: u32::from(has_email) * EMAIL_POINTS + u32::from(has_phone) * PHONE_POINTS,
        length: length_points(word_count),
        action_verbs: if has_action_verb { ACTION_VERB_POINTS } else { 0 },
    };

    AtsScoreResult {
        score: breakdown.total().min(MAX_SCORE),
        skills_found,
        sections_found,
        word_count,
        has_email,
        has_phone,
        breakdown,
    }
}

fn length_points(word_count: usize) -> u32 {
    match word_count {
        400..=1200 => 10,
        250..=399 => 5,
        _ => 0,
    }
}
