// Scoring passes over normalized resume text.
// Each pass is a pure function of its input and the catalog; none of them log.

pub mod ats;
pub mod jd_matcher;
pub mod role_matcher;
pub mod skill_gap;
