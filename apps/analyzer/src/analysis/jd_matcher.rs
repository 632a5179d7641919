//! Job Description Matcher — word-token overlap between a resume and a free-text JD.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;
use crate::text::{normalize, percentage, tokenize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptionMatch {
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub match_score: u32, // 0 – 100
}

/// Compares the resume's word tokens against the job description's.
///
/// Only an empty job description is rejected; an empty resume simply matches
/// nothing.
pub fn match_job_description(
    resume_text: &str,
    job_description: &str,
) -> Result<JobDescriptionMatch, AnalysisError> {
    if job_description.is_empty() {
        return Err(AnalysisError::Input(
            "job_description is required".to_string(),
        ));
    }

    let resume_tokens = tokenize(&normalize(resume_text));
    let jd_tokens = tokenize(&normalize(job_description));

    let (matched_skills, missing_skills): (BTreeSet<String>, BTreeSet<String>) = jd_tokens
        .iter()
        .cloned()
        .partition(|token| resume_tokens.contains(token));

    Ok(JobDescriptionMatch {
        match_score: percentage(matched_skills.len(), jd_tokens.len()),
        matched_skills,
        missing_skills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_resume_matches_nothing() {
        let result = match_job_description("", "developer python").unwrap();
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, set(&["developer", "python"]));
        assert_eq!(result.match_score, 0);
    }

    #[test]
    fn test_empty_job_description_is_input_error() {
        let err = match_job_description("python developer", "").unwrap_err();
        assert_eq!(err, AnalysisError::Input("job_description is required".to_string()));
        assert!(match_job_description("", "").is_err());
    }

    #[test]
    fn test_whitespace_only_job_description_scores_zero() {
        let result = match_job_description("python", "  \n ").unwrap();
        assert_eq!(result.match_score, 0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_overlap() {
        let result = match_job_description(
            "Built REST services in Python and Django.",
            "Python developer with Django and AWS experience",
        )
        .unwrap();

        assert_eq!(result.matched_skills, set(&["and", "django", "python"]));
        assert_eq!(
            result.missing_skills,
            set(&["aws", "developer", "experience", "with"])
        );
        // 3 of 7 tokens
        assert_eq!(result.match_score, 43);
    }

    #[test]
    fn test_matching_is_token_based_not_substring() {
        let result = match_job_description("javascript", "java").unwrap();
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.match_score, 0);
    }

    #[test]
    fn test_repeated_jd_words_count_once() {
        let result = match_job_description("rust", "Rust rust RUST tokio").unwrap();
        assert_eq!(result.matched_skills, set(&["rust"]));
        assert_eq!(result.missing_skills, set(&["tokio"]));
        assert_eq!(result.match_score, 50);
    }

    #[test]
    fn test_full_match_scores_100() {
        let result = match_job_description("Senior Rust engineer", "rust ENGINEER").unwrap();
        assert_eq!(result.match_score, 100);
        assert!(result.missing_skills.is_empty());
    }
}
