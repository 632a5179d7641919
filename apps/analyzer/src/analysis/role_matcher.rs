//! Job Role Matcher — percentage of each role's required skills present in
//! the resume, filtered by a minimum threshold and ranked.

use serde::{Deserialize, Serialize};

use crate::catalog::RoleCatalog;
use crate::text::{keywords_present, normalize, percentage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub role: String,
    pub match_percentage: u32, // 0 – 100
    pub matched_skills: Vec<String>,
}

/// Returns every role whose match percentage is at least `threshold`, highest
/// first. Ties keep catalog order. An empty result is a normal outcome.
pub fn match_roles(text: &str, roles: &RoleCatalog, threshold: u32) -> Vec<JobMatch> {
    let text = normalize(text);

    let mut matches: Vec<JobMatch> = roles
        .iter()
        .filter_map(|role| {
            let matched_skills =
                keywords_present(&text, role.required_skills().iter().map(String::as_str));
            let match_percentage = percentage(matched_skills.len(), role.required_skills().len());

            (match_percentage >= threshold).then(|| JobMatch {
                role: role.name().to_string(),
                match_percentage,
                matched_skills,
            })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RoleDefinition};
    use crate::config::DEFAULT_ROLE_MATCH_THRESHOLD;

    fn roles() -> RoleCatalog {
        Catalog::default().roles
    }

    fn names(matches: &[JobMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.role.as_str()).collect()
    }

    #[test]
    fn test_java_only_resume_is_below_threshold() {
        let matches = match_roles("Java", &roles(), DEFAULT_ROLE_MATCH_THRESHOLD);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let text = "Docker, AWS and Kubernetes; scripting in Python with Django";
        let matches = match_roles(text, &roles(), DEFAULT_ROLE_MATCH_THRESHOLD);

        assert_eq!(
            names(&matches),
            vec!["DevOps Engineer", "Backend Developer", "Full Stack Developer"]
        );
        assert_eq!(matches[0].match_percentage, 100);
        assert_eq!(matches[1].match_percentage, 50);
        assert_eq!(matches[2].match_percentage, 50);
        assert_eq!(matches[1].matched_skills, vec!["python", "django"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = RoleCatalog::new(vec![
            RoleDefinition::new("Data Engineer", ["spark", "kafka", "airflow", "sql", "python"])
                .unwrap(),
        ])
        .unwrap();

        // 2/5 = 40%
        let matches = match_roles("spark and kafka", &catalog, 40);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].match_percentage, 40);

        // 1/5 = 20%
        assert!(match_roles("spark", &catalog, 40).is_empty());
    }

    #[test]
    fn test_never_returns_below_threshold() {
        let text = "python react html sql docker";
        let matches = match_roles(text, &roles(), DEFAULT_ROLE_MATCH_THRESHOLD);
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|m| m.match_percentage >= 40));
        assert!(matches
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage));
    }

    #[test]
    fn test_percentage_is_rounded() {
        // 2/3 java roles → 67
        let matches = match_roles("java spring", &roles(), DEFAULT_ROLE_MATCH_THRESHOLD);
        assert_eq!(names(&matches), vec!["Java Developer"]);
        assert_eq!(matches[0].match_percentage, 67);
    }

    #[test]
    fn test_empty_catalog_and_empty_text() {
        assert!(match_roles("python", &RoleCatalog::default(), 40).is_empty());
        assert!(match_roles("", &roles(), 40).is_empty());
    }

    #[test]
    fn test_zero_threshold_returns_every_role() {
        let matches = match_roles("", &roles(), 0);
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0].role, "Backend Developer");
    }
}
